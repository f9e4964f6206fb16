use web_sys::HtmlElement;
use yew::NodeRef;

/// Something on the page whose vertical offset can be read while it is mounted.
pub trait SectionAnchor {
    /// Offset from the top of the document in pixels, or `None` while the
    /// element is not mounted or laid out.
    fn offset_top(&self) -> Option<i32>;
}

impl SectionAnchor for NodeRef {
    fn offset_top(&self) -> Option<i32> {
        self.cast::<HtmlElement>().map(|element| element.offset_top())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SectionHandle(usize);

#[derive(Clone, Debug, PartialEq)]
pub struct Section<A> {
    pub id: String,
    pub title: String,
    anchor: A,
}

impl<A> Section<A> {
    pub fn anchor(&self) -> &A {
        &self.anchor
    }
}

/// Ordered set of navigable sections.
///
/// Offsets are never cached: every query goes back to the anchor, so a
/// relayout is picked up on the next read.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionRegistry<A> {
    sections: Vec<Section<A>>,
}

impl<A> Default for SectionRegistry<A> {
    fn default() -> Self {
        Self { sections: Vec::new() }
    }
}

impl<A: SectionAnchor> SectionRegistry<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a section at the end of the order. Registering an identifier a
    /// second time replaces its title and anchor but keeps its position.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        title: impl Into<String>,
        anchor: A,
    ) -> SectionHandle {
        let id = id.into();
        let title = title.into();

        if let Some(index) = self.sections.iter().position(|s| s.id == id) {
            let existing = &mut self.sections[index];
            existing.title = title;
            existing.anchor = anchor;
            return SectionHandle(index);
        }

        self.sections.push(Section { id, title, anchor });
        SectionHandle(self.sections.len() - 1)
    }

    pub fn current_offset(&self, handle: SectionHandle) -> Option<i32> {
        self.sections.get(handle.0)?.anchor.offset_top()
    }

    pub fn ordered_identifiers(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.id.as_str()).collect()
    }

    pub fn handle_of(&self, id: &str) -> Option<SectionHandle> {
        self.sections.iter().position(|s| s.id == id).map(SectionHandle)
    }

    /// The first registered identifier; active until something else qualifies.
    pub fn default_identifier(&self) -> Option<&str> {
        self.sections.first().map(|s| s.id.as_str())
    }

    pub fn anchor(&self, handle: SectionHandle) -> Option<&A> {
        self.sections.get(handle.0).map(|s| &s.anchor)
    }

    pub fn entries(&self) -> impl Iterator<Item = &Section<A>> {
        self.sections.iter()
    }

    /// Identifier and live offset of every section, unresolved ones included.
    pub fn resolved_offsets(&self) -> impl Iterator<Item = (&str, Option<i32>)> {
        self.sections
            .iter()
            .map(|s| (s.id.as_str(), s.anchor.offset_top()))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Anchor whose offset the test can move around or unmount.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub(crate) struct TestAnchor(pub Rc<Cell<Option<i32>>>);

    impl TestAnchor {
        pub(crate) fn at(offset: i32) -> Self {
            Self(Rc::new(Cell::new(Some(offset))))
        }

        pub(crate) fn unmounted() -> Self {
            Self(Rc::new(Cell::new(None)))
        }
    }

    impl SectionAnchor for TestAnchor {
        fn offset_top(&self) -> Option<i32> {
            self.0.get()
        }
    }

    #[test]
    fn keeps_registration_order() {
        let mut registry = SectionRegistry::new();
        registry.register("hero", "首页", TestAnchor::at(0));
        registry.register("modules", "核心功能", TestAnchor::at(900));
        registry.register("payment", "支付与协议", TestAnchor::at(400));

        assert_eq!(registry.ordered_identifiers(), vec!["hero", "modules", "payment"]);
        assert_eq!(registry.default_identifier(), Some("hero"));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn duplicate_registration_replaces_in_place() {
        let mut registry = SectionRegistry::new();
        let first = registry.register("a", "A", TestAnchor::at(10));
        registry.register("b", "B", TestAnchor::at(20));
        let again = registry.register("a", "A2", TestAnchor::at(30));

        assert_eq!(first, again);
        assert_eq!(registry.ordered_identifiers(), vec!["a", "b"]);
        assert_eq!(registry.current_offset(first), Some(30));
        assert_eq!(registry.entries().next().map(|s| s.title.as_str()), Some("A2"));
    }

    #[test]
    fn offsets_are_read_live() {
        let anchor = TestAnchor::unmounted();
        let mut registry = SectionRegistry::new();
        let handle = registry.register("hero", "首页", anchor.clone());

        assert_eq!(registry.current_offset(handle), None);
        anchor.0.set(Some(120));
        assert_eq!(registry.current_offset(handle), Some(120));
        anchor.0.set(Some(64));
        assert_eq!(registry.current_offset(handle), Some(64));
    }

    #[test]
    fn unknown_lookups_are_none() {
        let registry: SectionRegistry<TestAnchor> = SectionRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.default_identifier(), None);
        assert_eq!(registry.handle_of("hero"), None);
        assert_eq!(registry.current_offset(SectionHandle(3)), None);
    }
}
