// i18n.rs - Display labels for toolbar keys

use std::collections::HashMap;

pub const DEFAULT_LOCALE: &str = "en";

const EN: &[(&str, &str)] = &[
    ("undo", "Undo"),
    ("redo", "Redo"),
    ("brush", "Format Painter"),
    ("eraser", "Clear Format"),
    ("heading", "Heading"),
    ("font-family", "Font Family"),
    ("font-size", "Font Size"),
    ("bold", "Bold"),
    ("italic", "Italic"),
    ("underline", "Underline"),
    ("strike", "Strike"),
    ("link", "Link"),
    ("code", "Inline Code"),
    ("subscript", "Subscript"),
    ("superscript", "Superscript"),
    ("hr", "Horizontal Rule"),
    ("todo", "Todo"),
    ("emoji", "Emoji"),
    ("highlight", "Highlight"),
    ("font-color", "Font Color"),
    ("align", "Align"),
    ("line-height", "Line Height"),
    ("bullet-list", "Bullet List"),
    ("ordered-list", "Ordered List"),
    ("indent-decrease", "Decrease Indent"),
    ("indent-increase", "Increase Indent"),
    ("break", "Line Break"),
    ("image", "Image"),
    ("video", "Video"),
    ("attachment", "Attachment"),
    ("quote", "Quote"),
    ("container", "Container"),
    ("code-block", "Code Block"),
    ("table", "Table"),
    ("printer", "Print"),
    ("fullscreen", "Fullscreen"),
    ("ai", "AI"),
];

const ZH: &[(&str, &str)] = &[
    ("undo", "撤销"),
    ("redo", "重做"),
    ("brush", "格式刷"),
    ("eraser", "清除格式"),
    ("heading", "标题"),
    ("font-family", "字体"),
    ("font-size", "字号"),
    ("bold", "加粗"),
    ("italic", "斜体"),
    ("underline", "下划线"),
    ("strike", "删除线"),
    ("link", "超链接"),
    ("code", "行内代码"),
    ("subscript", "下标"),
    ("superscript", "上标"),
    ("hr", "分割线"),
    ("todo", "任务列表"),
    ("emoji", "表情"),
    ("highlight", "高亮"),
    ("font-color", "字体颜色"),
    ("align", "对齐方式"),
    ("line-height", "行高"),
    ("bullet-list", "无序列表"),
    ("ordered-list", "有序列表"),
    ("indent-decrease", "减少缩进"),
    ("indent-increase", "增加缩进"),
    ("break", "强制换行"),
    ("image", "图片"),
    ("video", "视频"),
    ("attachment", "附件"),
    ("quote", "引用"),
    ("container", "高亮块"),
    ("code-block", "代码块"),
    ("table", "表格"),
    ("printer", "打印"),
    ("fullscreen", "全屏"),
    ("ai", "AI"),
];

/// Locale tables with fallback to English, then to the key itself
#[derive(Debug, Clone)]
pub struct Translator {
    locale: String,
    tables: HashMap<String, HashMap<String, String>>,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

impl Translator {
    pub fn new(locale: &str) -> Self {
        let mut tables = HashMap::new();
        tables.insert("en".to_string(), table(EN));
        tables.insert("zh".to_string(), table(ZH));
        Self {
            locale: locale.to_string(),
            tables,
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Merge `overrides` (locale -> key -> text) over the built-in tables.
    /// An empty text suppresses the label.
    pub fn extend(&mut self, overrides: &HashMap<String, HashMap<String, String>>) {
        for (locale, entries) in overrides {
            let table = self.tables.entry(locale.clone()).or_default();
            for (key, text) in entries {
                table.insert(key.clone(), text.clone());
            }
        }
    }

    /// Resolve `key`. Unknown keys resolve to themselves, so a literal
    /// tooltip text passes through unchanged.
    pub fn t(&self, key: &str) -> String {
        [self.locale.as_str(), DEFAULT_LOCALE]
            .iter()
            .find_map(|locale| self.tables.get(*locale)?.get(key))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

fn table(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
