use crate::attr::{AttrKind, Attribute, Content, Payload};
use crate::element::{Element, ElementKey, ElementKind};
use crate::error::DocumentError;
use crate::events::Event;
use regex::RegexBuilder;
use std::collections::{HashMap, VecDeque};
use style::UnitValue;

/// The owning aggregate: element registry, id index, and pending events.
///
/// Every element is owned by exactly one document and addressed through its
/// [`ElementKey`]. The registry is the single source of truth for liveness;
/// destruction erases keys, and stale keys fail with
/// [`DocumentError::NoSuchElement`].
pub struct Document {
    pub(crate) elements: HashMap<ElementKey, Element>,
    pub(crate) ids: HashMap<String, ElementKey>,
    pub(crate) pending: VecDeque<(ElementKey, Event)>,
    next_key: u64,
    pub(crate) next_listener: u64,
    root: ElementKey,
}

impl Document {
    /// An empty document: just the root `View` element.
    pub fn new() -> Self {
        let mut doc = Self {
            elements: HashMap::new(),
            ids: HashMap::new(),
            pending: VecDeque::new(),
            next_key: 0,
            next_listener: 0,
            root: ElementKey::from_raw(0),
        };
        doc.root = doc.create_element(ElementKind::View);
        doc
    }

    pub fn root(&self) -> ElementKey {
        self.root
    }

    /// Number of live elements, the root included.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        // The root always exists; "empty" means nothing beside it.
        self.elements.len() <= 1
    }

    pub fn is_alive(&self, key: ElementKey) -> bool {
        self.elements.contains_key(&key)
    }

    /// Allocate and register a detached element. Keys are monotonic and
    /// never reused.
    pub fn create_element(&mut self, kind: ElementKind) -> ElementKey {
        let key = ElementKey::from_raw(self.next_key);
        self.next_key += 1;
        self.elements.insert(key, Element::new(kind));
        key
    }

    pub fn kind(&self, key: ElementKey) -> Result<ElementKind, DocumentError> {
        Ok(self.elem(key)?.kind)
    }

    pub(crate) fn elem(&self, key: ElementKey) -> Result<&Element, DocumentError> {
        self.elements
            .get(&key)
            .ok_or(DocumentError::NoSuchElement(key))
    }

    pub(crate) fn elem_mut(&mut self, key: ElementKey) -> Result<&mut Element, DocumentError> {
        self.elements
            .get_mut(&key)
            .ok_or(DocumentError::NoSuchElement(key))
    }

    // --- structure ---------------------------------------------------------

    /// Link a detached element as `parent`'s last child.
    pub fn append_child(
        &mut self,
        parent: ElementKey,
        child: ElementKey,
    ) -> Result<(), DocumentError> {
        self.elem(parent)?;
        if child == self.root {
            return Err(DocumentError::CannotAttachRoot);
        }
        if self.elem(child)?.parent.is_some() {
            return Err(DocumentError::AlreadyAttached(child));
        }
        if self.in_subtree(child, parent) {
            return Err(DocumentError::CycleDetected { parent, child });
        }

        let old_last = self.elem(parent)?.last_child;
        {
            let c = self.elem_mut(child)?;
            c.parent = Some(parent);
            c.prev_sibling = old_last;
            c.next_sibling = None;
        }
        match old_last {
            Some(last) => self.elem_mut(last)?.next_sibling = Some(child),
            None => self.elem_mut(parent)?.first_child = Some(child),
        }
        let p = self.elem_mut(parent)?;
        p.last_child = Some(child);
        p.child_count += 1;
        Ok(())
    }

    /// Link `new` directly after `node` under `node`'s parent.
    pub fn append_sibling(
        &mut self,
        node: ElementKey,
        new: ElementKey,
    ) -> Result<(), DocumentError> {
        self.insert_after(new, node)
    }

    /// Link a detached element directly before an attached one.
    pub fn insert_before(
        &mut self,
        new: ElementKey,
        existing: ElementKey,
    ) -> Result<(), DocumentError> {
        let (parent, anchor_prev) = self.splice_checks(new, existing)?;
        {
            let n = self.elem_mut(new)?;
            n.parent = Some(parent);
            n.prev_sibling = anchor_prev;
            n.next_sibling = Some(existing);
        }
        self.elem_mut(existing)?.prev_sibling = Some(new);
        match anchor_prev {
            Some(prev) => self.elem_mut(prev)?.next_sibling = Some(new),
            None => self.elem_mut(parent)?.first_child = Some(new),
        }
        self.elem_mut(parent)?.child_count += 1;
        Ok(())
    }

    /// Link a detached element directly after an attached one.
    pub fn insert_after(
        &mut self,
        new: ElementKey,
        existing: ElementKey,
    ) -> Result<(), DocumentError> {
        let (parent, _) = self.splice_checks(new, existing)?;
        let anchor_next = self.elem(existing)?.next_sibling;
        {
            let n = self.elem_mut(new)?;
            n.parent = Some(parent);
            n.prev_sibling = Some(existing);
            n.next_sibling = anchor_next;
        }
        self.elem_mut(existing)?.next_sibling = Some(new);
        match anchor_next {
            Some(next) => self.elem_mut(next)?.prev_sibling = Some(new),
            None => self.elem_mut(parent)?.last_child = Some(new),
        }
        self.elem_mut(parent)?.child_count += 1;
        Ok(())
    }

    pub fn insert_before_id(&mut self, new: ElementKey, id: &str) -> Result<(), DocumentError> {
        let existing = self.get_element(id)?;
        self.insert_before(new, existing)
    }

    pub fn insert_after_id(&mut self, new: ElementKey, id: &str) -> Result<(), DocumentError> {
        let existing = self.get_element(id)?;
        self.insert_after(new, existing)
    }

    fn splice_checks(
        &self,
        new: ElementKey,
        existing: ElementKey,
    ) -> Result<(ElementKey, Option<ElementKey>), DocumentError> {
        if new == self.root {
            return Err(DocumentError::CannotAttachRoot);
        }
        let anchor = self.elem(existing)?;
        let parent = anchor.parent.ok_or(DocumentError::Detached(existing))?;
        let anchor_prev = anchor.prev_sibling;
        if self.elem(new)?.parent.is_some() {
            return Err(DocumentError::AlreadyAttached(new));
        }
        if self.in_subtree(new, parent) {
            return Err(DocumentError::CycleDetected { parent, child: new });
        }
        Ok((parent, anchor_prev))
    }

    /// Unlink `child` from `parent` and destroy its whole subtree.
    pub fn remove_child(
        &mut self,
        parent: ElementKey,
        child: ElementKey,
    ) -> Result<(), DocumentError> {
        self.elem(parent)?;
        if self.elem(child)?.parent != Some(parent) {
            return Err(DocumentError::NotAChild { child, parent });
        }
        self.unlink(child)?;
        self.destroy_subtree(child);
        Ok(())
    }

    /// Destroy every descendant of `node`. Idempotent; `node` survives.
    pub fn remove_children(&mut self, node: ElementKey) -> Result<(), DocumentError> {
        let children: Vec<ElementKey> = self.children(node)?.collect();
        for child in children {
            self.destroy_subtree(child);
        }
        let el = self.elem_mut(node)?;
        el.first_child = None;
        el.last_child = None;
        el.child_count = 0;
        Ok(())
    }

    /// Put `new` in `old`'s exact tree position, then destroy `old`'s whole
    /// subtree. No key of the replaced subtree survives in the registry.
    pub fn replace_child(
        &mut self,
        parent: ElementKey,
        new: ElementKey,
        old: ElementKey,
    ) -> Result<(), DocumentError> {
        self.elem(parent)?;
        if new == self.root {
            return Err(DocumentError::CannotAttachRoot);
        }
        if self.elem(old)?.parent != Some(parent) {
            return Err(DocumentError::NotAChild { child: old, parent });
        }
        if self.elem(new)?.parent.is_some() {
            return Err(DocumentError::AlreadyAttached(new));
        }
        if self.in_subtree(new, parent) {
            return Err(DocumentError::CycleDetected { parent, child: new });
        }

        let (prev, next) = {
            let o = self.elem(old)?;
            (o.prev_sibling, o.next_sibling)
        };
        {
            let n = self.elem_mut(new)?;
            n.parent = Some(parent);
            n.prev_sibling = prev;
            n.next_sibling = next;
        }
        match prev {
            Some(p) => self.elem_mut(p)?.next_sibling = Some(new),
            None => self.elem_mut(parent)?.first_child = Some(new),
        }
        match next {
            Some(n) => self.elem_mut(n)?.prev_sibling = Some(new),
            None => self.elem_mut(parent)?.last_child = Some(new),
        }
        // child_count is unchanged: one out, one in.
        {
            let o = self.elem_mut(old)?;
            o.parent = None;
            o.prev_sibling = None;
            o.next_sibling = None;
        }
        self.destroy_subtree(old);
        Ok(())
    }

    /// Unlink `node` (if attached) and destroy it with its subtree.
    pub fn remove(&mut self, node: ElementKey) -> Result<(), DocumentError> {
        if node == self.root {
            return Err(DocumentError::CannotDestroyRoot);
        }
        self.elem(node)?;
        self.unlink(node)?;
        self.destroy_subtree(node);
        Ok(())
    }

    /// Destroy all descendants and empty the payload; attributes and
    /// listeners stay.
    pub fn clear(&mut self, node: ElementKey) -> Result<(), DocumentError> {
        self.remove_children(node)?;
        self.elem_mut(node)?.payload.clear();
        Ok(())
    }

    fn unlink(&mut self, key: ElementKey) -> Result<(), DocumentError> {
        let (parent, prev, next) = {
            let el = self.elem(key)?;
            (el.parent, el.prev_sibling, el.next_sibling)
        };
        let Some(parent) = parent else {
            return Ok(());
        };
        match prev {
            Some(p) => self.elem_mut(p)?.next_sibling = next,
            None => self.elem_mut(parent)?.first_child = next,
        }
        match next {
            Some(n) => self.elem_mut(n)?.prev_sibling = prev,
            None => self.elem_mut(parent)?.last_child = prev,
        }
        self.elem_mut(parent)?.child_count -= 1;
        let el = self.elem_mut(key)?;
        el.parent = None;
        el.prev_sibling = None;
        el.next_sibling = None;
        Ok(())
    }

    /// Erase `key` and every descendant from the registry and the id index.
    /// The subtree must already be unlinked from any outside parent.
    fn destroy_subtree(&mut self, key: ElementKey) {
        let mut order = Vec::new();
        let mut stack = vec![key];
        while let Some(k) = stack.pop() {
            order.push(k);
            let mut child = self.elements.get(&k).and_then(|e| e.first_child);
            while let Some(c) = child {
                stack.push(c);
                child = self.elements.get(&c).and_then(|e| e.next_sibling);
            }
        }
        // Reverse pre-order: children always drop before their parent.
        for k in order.into_iter().rev() {
            if let Some(el) = self.elements.remove(&k) {
                if let Some(id) = el.indexed_id() {
                    if self.ids.get(id) == Some(&k) {
                        self.ids.remove(id);
                    }
                }
            }
        }
        log::trace!(target: "dom.document", "destroyed subtree at {key:?}, {} live elements remain", self.elements.len());
    }

    /// Is `needle` inside the subtree rooted at `root` (root included)?
    fn in_subtree(&self, root: ElementKey, needle: ElementKey) -> bool {
        if root == needle {
            return true;
        }
        let mut stack = vec![root];
        while let Some(k) = stack.pop() {
            let mut child = self.elements.get(&k).and_then(|e| e.first_child);
            while let Some(c) = child {
                if c == needle {
                    return true;
                }
                stack.push(c);
                child = self.elements.get(&c).and_then(|e| e.next_sibling);
            }
        }
        false
    }

    // --- traversal reads ---------------------------------------------------

    pub fn parent(&self, key: ElementKey) -> Result<Option<ElementKey>, DocumentError> {
        Ok(self.elem(key)?.parent)
    }

    pub fn first_child(&self, key: ElementKey) -> Result<Option<ElementKey>, DocumentError> {
        Ok(self.elem(key)?.first_child)
    }

    pub fn last_child(&self, key: ElementKey) -> Result<Option<ElementKey>, DocumentError> {
        Ok(self.elem(key)?.last_child)
    }

    pub fn next_sibling(&self, key: ElementKey) -> Result<Option<ElementKey>, DocumentError> {
        Ok(self.elem(key)?.next_sibling)
    }

    pub fn prev_sibling(&self, key: ElementKey) -> Result<Option<ElementKey>, DocumentError> {
        Ok(self.elem(key)?.prev_sibling)
    }

    pub fn child_count(&self, key: ElementKey) -> Result<usize, DocumentError> {
        Ok(self.elem(key)?.child_count)
    }

    /// Children in document order.
    pub fn children(&self, key: ElementKey) -> Result<Children<'_>, DocumentError> {
        Ok(Children {
            doc: self,
            cursor: self.elem(key)?.first_child,
            reverse: false,
        })
    }

    /// Children last-to-first; the exact reverse of [`Self::children`].
    pub fn children_rev(&self, key: ElementKey) -> Result<Children<'_>, DocumentError> {
        Ok(Children {
            doc: self,
            cursor: self.elem(key)?.last_child,
            reverse: true,
        })
    }

    /// Depth-first pre-order walk, `key` itself first.
    pub fn descendants(&self, key: ElementKey) -> Result<Descendants<'_>, DocumentError> {
        self.elem(key)?;
        Ok(Descendants {
            doc: self,
            stack: vec![key],
        })
    }

    // --- attributes --------------------------------------------------------

    /// Store an attribute value, dispatching on its kind. `IndexBy` also
    /// maintains the id index (see `reindex`); everything else is a plain
    /// slot overwrite.
    pub fn set_attribute(
        &mut self,
        key: ElementKey,
        attr: Attribute,
    ) -> Result<(), DocumentError> {
        self.elem(key)?;
        if let Attribute::IndexBy(new_id) = &attr {
            self.reindex(key, new_id)?;
        }
        self.elem_mut(key)?.attrs.insert(attr.kind(), attr);
        Ok(())
    }

    /// The identity remap. Cases over (this element's old id, the id's
    /// current owner): same id is a no-op; a held old entry is released
    /// only if it still points here; an empty new id clears without
    /// inserting; inserting steals the id from any other owner, which
    /// keeps its now-stale stored attribute.
    fn reindex(&mut self, key: ElementKey, new_id: &str) -> Result<(), DocumentError> {
        let old = self.elem(key)?.indexed_id().map(str::to_owned);
        if old.as_deref() == Some(new_id) {
            return Ok(());
        }
        if let Some(old) = old {
            if self.ids.get(&old) == Some(&key) {
                self.ids.remove(&old);
            }
        }
        if new_id.is_empty() {
            return Ok(());
        }
        if let Some(loser) = self.ids.insert(new_id.to_owned(), key) {
            log::trace!(target: "dom.document", "id {new_id:?} remapped from {loser:?} to {key:?}");
        }
        Ok(())
    }

    /// Replace a typed content list (scalar input becomes a one-element
    /// list).
    pub fn set_content(&mut self, key: ElementKey, content: Content) -> Result<(), DocumentError> {
        self.elem_mut(key)?.payload.apply(content);
        Ok(())
    }

    /// Append one text run to the payload.
    pub fn append_text(&mut self, key: ElementKey, run: &str) -> Result<(), DocumentError> {
        self.elem_mut(key)?.payload.text.push(run.to_owned());
        Ok(())
    }

    /// Read an attribute slot; reading an unset slot is an error, probe
    /// with [`Self::has_attribute`] first when absence is expected.
    pub fn attribute(&self, key: ElementKey, kind: AttrKind) -> Result<&Attribute, DocumentError> {
        self.elem(key)?
            .attrs
            .get(&kind)
            .ok_or(DocumentError::AttributeNotSet { key, kind })
    }

    pub fn has_attribute(&self, key: ElementKey, kind: AttrKind) -> Result<bool, DocumentError> {
        Ok(self.elem(key)?.attrs.contains_key(&kind))
    }

    /// The stored index id, if any. After an id steal this still reads the
    /// stale stored value; resolve through [`Self::get_element`] for truth.
    pub fn id_of(&self, key: ElementKey) -> Result<Option<&str>, DocumentError> {
        Ok(self.elem(key)?.indexed_id())
    }

    pub fn text_of(&self, key: ElementKey) -> Result<&[String], DocumentError> {
        Ok(self.elem(key)?.payload.text.as_slice())
    }

    pub fn payload(&self, key: ElementKey) -> Result<&Payload, DocumentError> {
        Ok(&self.elem(key)?.payload)
    }

    pub fn move_to(
        &mut self,
        key: ElementKey,
        top: UnitValue,
        left: UnitValue,
    ) -> Result<(), DocumentError> {
        self.set_attribute(key, Attribute::ObjectTop(top))?;
        self.set_attribute(key, Attribute::ObjectLeft(left))
    }

    pub fn resize(
        &mut self,
        key: ElementKey,
        width: UnitValue,
        height: UnitValue,
    ) -> Result<(), DocumentError> {
        self.set_attribute(key, Attribute::ObjectWidth(width))?;
        self.set_attribute(key, Attribute::ObjectHeight(height))
    }

    // --- queries -----------------------------------------------------------

    pub fn get_element(&self, id: &str) -> Result<ElementKey, DocumentError> {
        self.ids
            .get(id)
            .copied()
            .ok_or_else(|| DocumentError::NoSuchId(id.to_owned()))
    }

    pub fn has_element(&self, id: &str) -> bool {
        self.ids.contains_key(id)
    }

    /// `"*"` returns every live element; any other pattern is matched
    /// case-insensitively (regex semantics) against each indexed id.
    /// Result order is unspecified.
    pub fn query(&self, pattern: &str) -> Result<Vec<ElementKey>, DocumentError> {
        if pattern == "*" {
            return Ok(self.elements.keys().copied().collect());
        }
        let re = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| DocumentError::BadPattern {
                pattern: pattern.to_owned(),
                reason: e.to_string(),
            })?;
        Ok(self
            .ids
            .iter()
            .filter(|(id, _)| re.is_match(id))
            .map(|(_, key)| *key)
            .collect())
    }

    /// Predicate scan over every live element. Result order is unspecified.
    pub fn query_fn<F>(&self, pred: F) -> Vec<ElementKey>
    where
        F: Fn(&Document, ElementKey) -> bool,
    {
        self.elements
            .keys()
            .copied()
            .filter(|key| pred(self, *key))
            .collect()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Children<'a> {
    doc: &'a Document,
    cursor: Option<ElementKey>,
    reverse: bool,
}

impl Iterator for Children<'_> {
    type Item = ElementKey;

    fn next(&mut self) -> Option<ElementKey> {
        let key = self.cursor.take()?;
        let el = self.doc.elements.get(&key)?;
        self.cursor = if self.reverse {
            el.prev_sibling
        } else {
            el.next_sibling
        };
        Some(key)
    }
}

pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<ElementKey>,
}

impl Iterator for Descendants<'_> {
    type Item = ElementKey;

    fn next(&mut self) -> Option<ElementKey> {
        let key = self.stack.pop()?;
        // Last child pushed first so the first child pops next.
        let mut child = self.doc.elements.get(&key).and_then(|e| e.last_child);
        while let Some(c) = child {
            self.stack.push(c);
            child = self.doc.elements.get(&c).and_then(|e| e.prev_sibling);
        }
        Some(key)
    }
}
