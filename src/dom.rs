use std::collections::HashMap;

use crate::render::html_escape;

/// One element of the page model. Elements live in a flat, document-ordered
/// list on [`Document`]; nesting is expressed through `parent`. The vertical
/// layout box (`top`, `height`, page coordinates in px) is what viewport
/// intersection is computed against.
#[derive(Debug, Clone)]
pub struct Element {
    pub id: String,
    pub tag: String,
    pub classes: Vec<String>,
    pub attrs: HashMap<String, String>,
    pub inner_html: String,
    pub parent: Option<String>,
    pub top: f64,
    pub height: f64,
}

impl Element {
    pub fn new(tag: &str, id: &str) -> Self {
        Element {
            id: id.to_string(),
            tag: tag.to_string(),
            classes: Vec::new(),
            attrs: HashMap::new(),
            inner_html: String::new(),
            parent: None,
            top: 0.0,
            height: 0.0,
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_parent(mut self, parent_id: &str) -> Self {
        self.parent = Some(parent_id.to_string());
        self
    }

    /// Place the element's layout box on the page.
    pub fn with_box(mut self, top: f64, height: f64) -> Self {
        self.top = top;
        self.height = height;
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(|v| v.as_str())
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attrs.insert(name.to_string(), value.to_string());
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.remove(name);
    }
}

/// The in-memory page: root classes (theme lives here) plus all elements in
/// document order. Lookup is by id; loaders each own exactly one container
/// element and never touch another loader's.
#[derive(Debug, Default)]
pub struct Document {
    pub root_classes: Vec<String>,
    elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Document::default()
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// Ids of all elements carrying a class, in document order.
    pub fn ids_with_class(&self, class: &str) -> Vec<String> {
        self.elements
            .iter()
            .filter(|e| e.has_class(class))
            .map(|e| e.id.clone())
            .collect()
    }

    /// Ids of all elements of a tag, in document order.
    pub fn ids_with_tag(&self, tag: &str) -> Vec<String> {
        self.elements
            .iter()
            .filter(|e| e.tag == tag)
            .map(|e| e.id.clone())
            .collect()
    }

    pub fn root_has_class(&self, class: &str) -> bool {
        self.root_classes.iter().any(|c| c == class)
    }

    pub fn root_add_class(&mut self, class: &str) {
        if !self.root_has_class(class) {
            self.root_classes.push(class.to_string());
        }
    }

    pub fn root_remove_class(&mut self, class: &str) {
        self.root_classes.retain(|c| c != class);
    }

    /// Serialize the whole page. Children nest under their parent in
    /// document order; everything else lands directly in `<body>`.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html");
        if !self.root_classes.is_empty() {
            out.push_str(&format!(
                " class=\"{}\"",
                html_escape(&self.root_classes.join(" "))
            ));
        }
        out.push_str(">\n<body>\n");
        for element in self.elements.iter().filter(|e| e.parent.is_none()) {
            self.write_element(element, &mut out);
            out.push('\n');
        }
        out.push_str("</body>\n</html>\n");
        out
    }

    fn write_element(&self, element: &Element, out: &mut String) {
        out.push_str(&format!("<{} id=\"{}\"", element.tag, html_escape(&element.id)));
        if !element.classes.is_empty() {
            out.push_str(&format!(
                " class=\"{}\"",
                html_escape(&element.classes.join(" "))
            ));
        }
        let mut names: Vec<&String> = element.attrs.keys().collect();
        names.sort();
        for name in names {
            out.push_str(&format!(
                " {}=\"{}\"",
                name,
                html_escape(&element.attrs[name])
            ));
        }
        out.push('>');
        out.push_str(&element.inner_html);
        for child in self
            .elements
            .iter()
            .filter(|e| e.parent.as_deref() == Some(element.id.as_str()))
        {
            self.write_element(child, out);
        }
        out.push_str(&format!("</{}>", element.tag));
    }
}
