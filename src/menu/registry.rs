// menu/registry.rs - Table of menu kinds, looked up by tag name

use std::collections::HashMap;

use super::{MenuButton, MenuError, builtin, custom::CustomButton};

/// Prefix joining a toolbar key to its registry tag
pub const TAG_PREFIX: &str = "toolbar-";

pub type MenuFactory = Box<dyn Fn() -> Result<Box<dyn MenuButton>, MenuError>>;

/// Maps tag names to button factories.
///
/// Built once at startup; the header only ever reads from it.
#[derive(Default)]
pub struct MenuRegistry {
    factories: HashMap<String, MenuFactory>,
    order: Vec<String>,
}

impl MenuRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in kind plus `toolbar-custom`
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for (key, factory) in builtin::factories() {
            registry.insert(tag_for(key), factory);
        }
        registry.insert(
            tag_for("custom"),
            Box::new(|| Ok(Box::new(CustomButton::new()) as Box<dyn MenuButton>)),
        );
        registry
    }

    /// Register `factory` under `tag`. Fails if the tag is taken.
    pub fn define<F>(&mut self, tag: impl Into<String>, factory: F) -> Result<(), MenuError>
    where
        F: Fn() -> Result<Box<dyn MenuButton>, MenuError> + 'static,
    {
        let tag = tag.into();
        if self.factories.contains_key(&tag) {
            return Err(MenuError::AlreadyDefined(tag));
        }
        self.insert(tag, Box::new(factory));
        Ok(())
    }

    fn insert(&mut self, tag: String, factory: MenuFactory) {
        if self.factories.insert(tag.clone(), factory).is_none() {
            self.order.push(tag);
        }
    }

    /// Instantiate the button registered under `tag`
    pub fn create(&self, tag: &str) -> Result<Box<dyn MenuButton>, MenuError> {
        let factory = self
            .factories
            .get(tag)
            .ok_or_else(|| MenuError::UnknownKey(tag.to_string()))?;
        factory()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.factories.contains_key(tag)
    }

    /// Registered tags, in registration order
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Registry tag for a toolbar key
pub fn tag_for(key: &str) -> String {
    format!("{}{}", TAG_PREFIX, key)
}
