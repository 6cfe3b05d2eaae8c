use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// 值的类型标签，任何值都能得到一个标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Number,
    Boolean,
    Null,
    Undefined,
    Function,
    String,
    Object,
}

impl TypeTag {
    pub fn as_str(self) -> &'static str {
        match self {
            TypeTag::Number => "number",
            TypeTag::Boolean => "boolean",
            TypeTag::Null => "null",
            TypeTag::Undefined => "undefined",
            TypeTag::Function => "function",
            TypeTag::String => "string",
            TypeTag::Object => "object",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 日志参数中的数据值，支持多种类型
#[derive(Debug, Clone, PartialEq)]
pub enum LogValue {
    String(String),
    I64(i64),
    U64(u64),
    F64(f64),
    Bool(bool),
    Null,
    Undefined,
    /// 函数值，只保留名称
    Function(String),
    /// 任意 JSON 兼容的数据（对象、数组）
    Object(Value),
}

impl LogValue {
    /// 类型标签
    pub fn type_tag(&self) -> TypeTag {
        match self {
            LogValue::String(_) => TypeTag::String,
            LogValue::I64(_) | LogValue::U64(_) | LogValue::F64(_) => TypeTag::Number,
            LogValue::Bool(_) => TypeTag::Boolean,
            LogValue::Null => TypeTag::Null,
            LogValue::Undefined => TypeTag::Undefined,
            LogValue::Function(_) => TypeTag::Function,
            LogValue::Object(_) => TypeTag::Object,
        }
    }

    /// 从任意实现了 Serialize 的自定义结构体创建对象值
    ///
    /// # 示例
    ///
    /// ```ignore
    /// #[derive(Serialize)]
    /// struct User {
    ///     id: i64,
    ///     name: String,
    /// }
    ///
    /// let value = LogValue::object(User { id: 123, name: "alice".to_string() });
    /// ```
    pub fn object<T: Serialize>(value: T) -> Self {
        match serde_json::to_value(value) {
            Ok(json_value) => LogValue::Object(json_value),
            Err(_) => LogValue::Null,
        }
    }

    /// 创建函数值
    pub fn function(name: impl Into<String>) -> Self {
        LogValue::Function(name.into())
    }
}

/// 浮点数的文本形式
///
/// 整数值不带小数点，非有限值写作 `NaN`、`Infinity`、`-Infinity`，负零写作 `0`
fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}

/// 通用的对象格式化：多行缩进的 JSON
pub fn format_object(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

impl fmt::Display for LogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogValue::String(s) => f.write_str(s),
            LogValue::I64(n) => write!(f, "{}", n),
            LogValue::U64(n) => write!(f, "{}", n),
            LogValue::F64(n) => f.write_str(&format_number(*n)),
            LogValue::Bool(b) => write!(f, "{}", b),
            LogValue::Null => f.write_str("null"),
            LogValue::Undefined => f.write_str("undefined"),
            LogValue::Function(name) if name.is_empty() => f.write_str("[Function (anonymous)]"),
            LogValue::Function(name) => write!(f, "[Function: {}]", name),
            LogValue::Object(v) => f.write_str(&format_object(v)),
        }
    }
}

impl Serialize for LogValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            LogValue::String(s) => serializer.serialize_str(s),
            LogValue::I64(n) => serializer.serialize_i64(*n),
            LogValue::U64(n) => serializer.serialize_u64(*n),
            LogValue::F64(n) => serializer.serialize_f64(*n),
            LogValue::Bool(b) => serializer.serialize_bool(*b),
            LogValue::Null | LogValue::Undefined => serializer.serialize_none(),
            LogValue::Function(_) => serializer.serialize_str(&self.to_string()),
            LogValue::Object(v) => v.serialize(serializer),
        }
    }
}

impl From<String> for LogValue {
    fn from(s: String) -> Self {
        LogValue::String(s)
    }
}

impl From<&str> for LogValue {
    fn from(s: &str) -> Self {
        LogValue::String(s.to_string())
    }
}

impl From<&String> for LogValue {
    fn from(s: &String) -> Self {
        LogValue::String(s.clone())
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for LogValue {
            fn from(n: $t) -> Self {
                LogValue::I64(n as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for LogValue {
            fn from(n: $t) -> Self {
                LogValue::U64(n as u64)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f64> for LogValue {
    fn from(n: f64) -> Self {
        LogValue::F64(n)
    }
}

impl From<f32> for LogValue {
    fn from(n: f32) -> Self {
        LogValue::F64(n as f64)
    }
}

impl From<bool> for LogValue {
    fn from(b: bool) -> Self {
        LogValue::Bool(b)
    }
}

impl From<&std::path::Path> for LogValue {
    fn from(p: &std::path::Path) -> Self {
        LogValue::String(p.display().to_string())
    }
}

impl<T: Into<LogValue>> From<Option<T>> for LogValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(LogValue::Null)
    }
}

impl From<Value> for LogValue {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => LogValue::Null,
            Value::Bool(b) => LogValue::Bool(b),
            Value::String(s) => LogValue::String(s),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    LogValue::I64(i)
                } else if let Some(u) = n.as_u64() {
                    LogValue::U64(u)
                } else {
                    LogValue::F64(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            other => LogValue::Object(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_tags() {
        assert_eq!(LogValue::from("x").type_tag(), TypeTag::String);
        assert_eq!(LogValue::from(42).type_tag(), TypeTag::Number);
        assert_eq!(LogValue::from(42u64).type_tag(), TypeTag::Number);
        assert_eq!(LogValue::from(1.5).type_tag(), TypeTag::Number);
        assert_eq!(LogValue::from(true).type_tag(), TypeTag::Boolean);
        assert_eq!(LogValue::Null.type_tag(), TypeTag::Null);
        assert_eq!(LogValue::Undefined.type_tag(), TypeTag::Undefined);
        assert_eq!(LogValue::function("main").type_tag(), TypeTag::Function);
        assert_eq!(LogValue::from(json!({"a": 1})).type_tag(), TypeTag::Object);
        assert_eq!(LogValue::from(json!([1, 2])).type_tag(), TypeTag::Object);
    }

    #[test]
    fn test_type_tag_display() {
        assert_eq!(TypeTag::Undefined.to_string(), "undefined");
        assert_eq!(TypeTag::Object.as_str(), "object");
    }

    #[test]
    fn test_display() {
        assert_eq!(LogValue::from(42.0).to_string(), "42");
        assert_eq!(LogValue::from(3.5).to_string(), "3.5");
        assert_eq!(LogValue::from(-7).to_string(), "-7");
        assert_eq!(LogValue::from(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(LogValue::from(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(LogValue::from(f64::NAN).to_string(), "NaN");
        assert_eq!(LogValue::from(-0.0).to_string(), "0");
        assert_eq!(LogValue::from(-2.5).to_string(), "-2.5");
        assert_eq!(LogValue::from(false).to_string(), "false");
        assert_eq!(LogValue::Null.to_string(), "null");
        assert_eq!(LogValue::Undefined.to_string(), "undefined");
        assert_eq!(LogValue::function("watch").to_string(), "[Function: watch]");
        assert_eq!(LogValue::function("").to_string(), "[Function (anonymous)]");
    }

    #[test]
    fn test_object_display_is_multiline() {
        let value = LogValue::from(json!({"name": "alice", "id": 1}));
        let text = value.to_string();
        assert!(text.contains('\n'));
        assert!(text.contains("\"name\": \"alice\""));
    }

    #[test]
    fn test_from_json_scalars() {
        assert_eq!(LogValue::from(json!(null)), LogValue::Null);
        assert_eq!(LogValue::from(json!("s")), LogValue::String("s".to_string()));
        assert_eq!(LogValue::from(json!(7)), LogValue::I64(7));
        assert_eq!(LogValue::from(json!(u64::MAX)), LogValue::U64(u64::MAX));
        assert_eq!(LogValue::from(json!(0.25)), LogValue::F64(0.25));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(LogValue::from(None::<i32>), LogValue::Null);
        assert_eq!(LogValue::from(Some("x")), LogValue::String("x".to_string()));
    }

    #[test]
    fn test_object_from_struct() {
        #[derive(Serialize)]
        struct User {
            id: i64,
            name: String,
        }

        let value = LogValue::object(User {
            id: 123,
            name: "alice".to_string(),
        });
        assert_eq!(value, LogValue::Object(json!({"id": 123, "name": "alice"})));
    }

    #[test]
    fn test_serialize() {
        let encoded = serde_json::to_string(&vec![
            LogValue::from("a"),
            LogValue::from(1),
            LogValue::Undefined,
            LogValue::function("f"),
        ])
        .unwrap();
        assert_eq!(encoded, r#"["a",1,null,"[Function: f]"]"#);
    }
}
