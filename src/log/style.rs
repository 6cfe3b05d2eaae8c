use crate::log::value::TypeTag;
use std::fmt;
use std::str::FromStr;

/// 预设引用的前缀字符
pub const PRESET_MARKER: char = '@';

/// 样式名称
///
/// 固定的闭合集合：前景色、背景色（名称以下划线开头）以及粗体、斜体、下划线
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleName {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
    BgBlack,
    BgRed,
    BgGreen,
    BgYellow,
    BgBlue,
    BgMagenta,
    BgCyan,
    BgWhite,
    BgGray,
    Bold,
    Italic,
    Underline,
}

impl StyleName {
    /// 终端 SGR 代码
    pub fn ansi_code(self) -> u8 {
        match self {
            StyleName::Black => 30,
            StyleName::Red => 31,
            StyleName::Green => 32,
            StyleName::Yellow => 33,
            StyleName::Blue => 34,
            StyleName::Magenta => 35,
            StyleName::Cyan => 36,
            StyleName::White => 37,
            StyleName::Gray => 90,
            StyleName::BgBlack => 40,
            StyleName::BgRed => 41,
            StyleName::BgGreen => 42,
            StyleName::BgYellow => 43,
            StyleName::BgBlue => 44,
            StyleName::BgMagenta => 45,
            StyleName::BgCyan => 46,
            StyleName::BgWhite => 47,
            StyleName::BgGray => 100,
            StyleName::Bold => 1,
            StyleName::Italic => 3,
            StyleName::Underline => 4,
        }
    }

    /// 内联 CSS 声明
    pub fn css_fragment(self) -> &'static str {
        match self {
            StyleName::Black => "color: black",
            StyleName::Red => "color: red",
            StyleName::Green => "color: green",
            StyleName::Yellow => "color: yellow",
            StyleName::Blue => "color: blue",
            StyleName::Magenta => "color: magenta",
            StyleName::Cyan => "color: cyan",
            StyleName::White => "color: white",
            StyleName::Gray => "color: gray",
            StyleName::BgBlack => "background: black",
            StyleName::BgRed => "background: red",
            StyleName::BgGreen => "background: green",
            StyleName::BgYellow => "background: yellow",
            StyleName::BgBlue => "background: blue",
            StyleName::BgMagenta => "background: magenta",
            StyleName::BgCyan => "background: cyan",
            StyleName::BgWhite => "background: white",
            StyleName::BgGray => "background: gray",
            StyleName::Bold => "font-weight: bold",
            StyleName::Italic => "font-style: italic",
            StyleName::Underline => "text-decoration: underline",
        }
    }

    /// 指令中使用的短名称
    pub fn as_str(self) -> &'static str {
        match self {
            StyleName::Black => "black",
            StyleName::Red => "red",
            StyleName::Green => "green",
            StyleName::Yellow => "yellow",
            StyleName::Blue => "blue",
            StyleName::Magenta => "magenta",
            StyleName::Cyan => "cyan",
            StyleName::White => "white",
            StyleName::Gray => "gray",
            StyleName::BgBlack => "_black",
            StyleName::BgRed => "_red",
            StyleName::BgGreen => "_green",
            StyleName::BgYellow => "_yellow",
            StyleName::BgBlue => "_blue",
            StyleName::BgMagenta => "_magenta",
            StyleName::BgCyan => "_cyan",
            StyleName::BgWhite => "_white",
            StyleName::BgGray => "_gray",
            StyleName::Bold => "b",
            StyleName::Italic => "i",
            StyleName::Underline => "u",
        }
    }
}

impl FromStr for StyleName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "black" => Ok(StyleName::Black),
            "red" => Ok(StyleName::Red),
            "green" => Ok(StyleName::Green),
            "yellow" => Ok(StyleName::Yellow),
            "blue" => Ok(StyleName::Blue),
            "magenta" => Ok(StyleName::Magenta),
            "cyan" => Ok(StyleName::Cyan),
            "white" => Ok(StyleName::White),
            "gray" => Ok(StyleName::Gray),
            "_black" => Ok(StyleName::BgBlack),
            "_red" => Ok(StyleName::BgRed),
            "_green" => Ok(StyleName::BgGreen),
            "_yellow" => Ok(StyleName::BgYellow),
            "_blue" => Ok(StyleName::BgBlue),
            "_magenta" => Ok(StyleName::BgMagenta),
            "_cyan" => Ok(StyleName::BgCyan),
            "_white" => Ok(StyleName::BgWhite),
            "_gray" => Ok(StyleName::BgGray),
            "b" | "bold" => Ok(StyleName::Bold),
            "i" | "italic" => Ok(StyleName::Italic),
            "u" | "underline" => Ok(StyleName::Underline),
            _ => Err(format!("invalid style name: {}", s)),
        }
    }
}

impl fmt::Display for StyleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use StyleName::*;

/// 预设表：短名称 -> 样式列表
const PRESETS: &[(&str, &[StyleName])] = &[
    ("path", &[Underline, Cyan]),
    ("!", &[Bold]),
    ("prefix", &[Yellow]),
    ("ip", &[Bold]),
    ("error", &[Red, Bold, Underline]),
];

/// 终端输出中前缀标签的样式
pub const PREFIX_STYLES: &[StyleName] = &[Green, Bold, Underline];

/// 错误标签的预设名称
pub const ERROR_PRESET: &str = "error";

/// 展开预设，未知名称返回空列表
pub fn expand_preset(name: &str) -> Vec<StyleName> {
    PRESETS
        .iter()
        .find(|(preset, _)| *preset == name)
        .map(|(_, styles)| styles.to_vec())
        .unwrap_or_default()
}

/// 所有预设名称
pub fn preset_names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|(name, _)| *name)
}

/// 各类型在终端渲染时的默认样式
///
/// object 没有默认样式，对象只做格式化不上色
pub fn default_styles(tag: TypeTag) -> &'static [StyleName] {
    match tag {
        TypeTag::Number | TypeTag::Boolean => &[Yellow],
        TypeTag::Null => &[Bold],
        TypeTag::Undefined => &[Gray],
        TypeTag::Function => &[Cyan],
        TypeTag::String => &[Magenta],
        TypeTag::Object => &[],
    }
}

/// 展开指令中的单个元素
///
/// `@` 开头的元素按预设展开，其余按样式名称解析；无法识别的元素不产生任何样式
pub fn expand_element(element: &str) -> Vec<StyleName> {
    match element.strip_prefix(PRESET_MARKER) {
        Some(preset) => expand_preset(preset),
        None => element.parse::<StyleName>().into_iter().collect(),
    }
}
