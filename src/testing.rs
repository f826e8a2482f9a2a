//! In-memory stand-in for the DOM facade.
//!
//! Backs the [`Dom`] trait with a plain node tree so the view code can run
//! under `cargo test` on any host. Clicks are dispatched synthetically and
//! listener registrations are counted, which is what lets the tests prove the
//! batch-release contract instead of trusting it.

use crate::dom::Dom;
use crate::error::WebError;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Fake facade handing out [`FakeElement`] and [`FakeListener`] handles.
#[derive(Clone, Default)]
pub(crate) struct FakeDom {
    arena: Rc<RefCell<Arena>>,
}

#[derive(Default)]
struct Arena {
    elements: Vec<FakeElement>,
    callbacks: BTreeMap<u64, Box<dyn FnMut()>>,
    next_listener: u64,
}

impl FakeDom {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Number of listener callbacks currently registered and not released.
    pub(crate) fn live_listeners(&self) -> usize {
        self.arena.borrow().callbacks.len()
    }

    /// Dispatches a synthetic click to every live handler on `element`.
    pub(crate) fn click(&self, element: &FakeElement) {
        let ids: Vec<u64> = element
            .node
            .borrow()
            .handlers
            .iter()
            .filter(|(event, _)| event == "click")
            .map(|(_, id)| *id)
            .collect();
        for id in ids {
            // Take the callback out for the duration of the call so it can
            // re-enter the facade without double-borrowing the arena.
            let callback = self.arena.borrow_mut().callbacks.remove(&id);
            if let Some(mut callback) = callback {
                callback();
                self.arena.borrow_mut().callbacks.insert(id, callback);
            }
        }
    }
}

impl Dom for FakeDom {
    type Element = FakeElement;
    type Listener = FakeListener;

    fn create_element(&self, tag: &str) -> Result<FakeElement, WebError> {
        let element = FakeElement::new(tag);
        self.arena.borrow_mut().elements.push(element.clone());
        Ok(element)
    }

    fn set_text(&self, element: &FakeElement, text: &str) {
        element.node.borrow_mut().text = text.to_string();
    }

    fn set_attribute(&self, element: &FakeElement, name: &str, value: &str) -> Result<(), WebError> {
        element
            .node
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn set_classes(&self, element: &FakeElement, classes: &[&str]) {
        element.node.borrow_mut().classes = classes.join(" ");
    }

    fn append_child(&self, parent: &FakeElement, child: &FakeElement) -> Result<(), WebError> {
        parent.node.borrow_mut().children.push(child.clone());
        Ok(())
    }

    fn remove_children(&self, element: &FakeElement) {
        // Listeners on removed children stay registered, exactly like the
        // browser: forgetting to release them is the leak under test.
        element.node.borrow_mut().children.clear();
    }

    fn add_listener(
        &self,
        element: &FakeElement,
        event: &str,
        callback: Box<dyn FnMut()>,
    ) -> Result<FakeListener, WebError> {
        let mut arena = self.arena.borrow_mut();
        let id = arena.next_listener;
        arena.next_listener += 1;
        arena.callbacks.insert(id, callback);
        element
            .node
            .borrow_mut()
            .handlers
            .push((event.to_string(), id));
        Ok(FakeListener { id })
    }

    fn release_listener(&self, listener: FakeListener) {
        self.arena.borrow_mut().callbacks.remove(&listener.id);
    }

    fn element_by_id(&self, id: &str) -> Option<FakeElement> {
        self.arena
            .borrow()
            .elements
            .iter()
            .find(|element| element.attribute("id").as_deref() == Some(id))
            .cloned()
    }
}

/// Handle to a node in the fake tree. Cloning clones the handle, not the node.
#[derive(Clone)]
pub(crate) struct FakeElement {
    node: Rc<RefCell<NodeData>>,
}

struct NodeData {
    tag: String,
    text: String,
    classes: String,
    attributes: BTreeMap<String, String>,
    children: Vec<FakeElement>,
    handlers: Vec<(String, u64)>,
}

impl FakeElement {
    fn new(tag: &str) -> Self {
        Self {
            node: Rc::new(RefCell::new(NodeData {
                tag: tag.to_string(),
                text: String::new(),
                classes: String::new(),
                attributes: BTreeMap::new(),
                children: Vec::new(),
                handlers: Vec::new(),
            })),
        }
    }

    pub(crate) fn tag(&self) -> String {
        self.node.borrow().tag.clone()
    }

    pub(crate) fn text(&self) -> String {
        self.node.borrow().text.clone()
    }

    pub(crate) fn classes(&self) -> String {
        self.node.borrow().classes.clone()
    }

    pub(crate) fn attribute(&self, name: &str) -> Option<String> {
        self.node.borrow().attributes.get(name).cloned()
    }

    pub(crate) fn children(&self) -> Vec<FakeElement> {
        self.node.borrow().children.clone()
    }

    pub(crate) fn child_count(&self) -> usize {
        self.node.borrow().children.len()
    }

    /// Child at `index`; panics when out of range, which is what a test wants.
    pub(crate) fn child(&self, index: usize) -> FakeElement {
        self.children()
            .get(index)
            .cloned()
            .unwrap_or_else(|| panic!("no child at index {index}"))
    }
}

/// Owning handle for a registered fake listener.
pub(crate) struct FakeListener {
    id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn click_reaches_only_live_handlers() {
        let dom = FakeDom::new();
        let element = dom.create_element("div").expect("element");
        let hits = Rc::new(Cell::new(0));

        let counter = Rc::clone(&hits);
        let listener = dom
            .add_listener(&element, "click", Box::new(move || counter.set(counter.get() + 1)))
            .expect("listener");

        dom.click(&element);
        assert_eq!(hits.get(), 1);

        dom.release_listener(listener);
        dom.click(&element);
        assert_eq!(hits.get(), 1);
        assert_eq!(dom.live_listeners(), 0);
    }

    #[test]
    fn element_by_id_scans_the_arena() {
        let dom = FakeDom::new();
        let element = dom.create_element("div").expect("element");
        dom.set_attribute(&element, "id", "body-component")
            .expect("attribute");

        assert!(dom.element_by_id("body-component").is_some());
        assert!(dom.element_by_id("missing").is_none());
    }
}
