//! Catalog navigation tree
//!
//! Examples register themselves with a breadcrumb path. One pass over the
//! registrations builds a read-only tree of [`DemoNode`]s: every breadcrumb but
//! the last names a category, the last names the example leaf. Registrations
//! that are not presentable are left out. Children keep registration order.

use catalog_theme::Themeable;
use std::fmt;

/// A displayable example screen
pub trait ExampleController: Themeable + Send {
    fn title(&self) -> &str;

    /// One-line description of the controller's current state
    fn summary(&self) -> String;
}

/// Creates the controller for a leaf example
pub type ExampleFactory = fn() -> Box<dyn ExampleController>;

/// Registration record for one example
#[derive(Clone)]
pub struct ExampleRegistration {
    pub breadcrumbs: Vec<String>,
    pub description: String,
    pub primary_demo: bool,
    pub debug: bool,
    pub presentable: bool,
    pub factory: ExampleFactory,
}

impl ExampleRegistration {
    pub fn new(breadcrumbs: &[&str], factory: ExampleFactory) -> Self {
        Self {
            breadcrumbs: breadcrumbs.iter().map(|s| s.to_string()).collect(),
            description: String::new(),
            primary_demo: false,
            debug: false,
            presentable: true,
            factory,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn primary_demo(mut self) -> Self {
        self.primary_demo = true;
        self
    }

    pub fn debug(mut self) -> Self {
        self.debug = true;
        self
    }

    /// Keep this example out of the navigation tree
    pub fn hidden(mut self) -> Self {
        self.presentable = false;
        self
    }
}

#[derive(Clone)]
struct ExampleInfo {
    description: String,
    primary_demo: bool,
    debug: bool,
    factory: ExampleFactory,
}

/// One entry in the catalog tree: a category or a leaf example
#[derive(Clone)]
pub struct DemoNode {
    title: String,
    example: Option<ExampleInfo>,
    children: Vec<DemoNode>,
}

impl DemoNode {
    pub fn category(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            example: None,
            children: Vec::new(),
        }
    }

    pub fn example(
        title: impl Into<String>,
        description: impl Into<String>,
        primary_demo: bool,
        factory: ExampleFactory,
    ) -> Self {
        Self {
            title: title.into(),
            example: Some(ExampleInfo {
                description: description.into(),
                primary_demo,
                debug: false,
                factory,
            }),
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: DemoNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn children(&self) -> &[DemoNode] {
        &self.children
    }

    pub fn is_example(&self) -> bool {
        self.example.is_some()
    }

    pub fn is_primary_demo(&self) -> bool {
        self.example.as_ref().is_some_and(|e| e.primary_demo)
    }

    pub fn is_debug(&self) -> bool {
        self.example.as_ref().is_some_and(|e| e.debug)
    }

    /// Description of a leaf example; `None` for categories
    pub fn example_description(&self) -> Option<&str> {
        self.example.as_ref().map(|e| e.description.as_str())
    }

    pub fn create_example_controller(&self) -> Option<Box<dyn ExampleController>> {
        self.example.as_ref().map(|e| (e.factory)())
    }

    pub fn child(&self, title: &str) -> Option<&DemoNode> {
        self.children.iter().find(|c| c.title == title)
    }

    /// Follow a title path from this node
    pub fn find(&self, path: &[&str]) -> Option<&DemoNode> {
        path.iter().try_fold(self, |node, title| node.child(title))
    }

    /// Depth-first listing of the subtree below this node with depths
    pub fn descendants(&self) -> Vec<(usize, &DemoNode)> {
        fn walk<'a>(node: &'a DemoNode, depth: usize, out: &mut Vec<(usize, &'a DemoNode)>) {
            for child in &node.children {
                out.push((depth, child));
                walk(child, depth + 1, out);
            }
        }
        let mut out = Vec::new();
        walk(self, 0, &mut out);
        out
    }
}

impl fmt::Debug for DemoNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DemoNode")
            .field("title", &self.title)
            .field("is_example", &self.is_example())
            .field("is_primary_demo", &self.is_primary_demo())
            .field("children", &self.children)
            .finish()
    }
}

/// Build the presentable navigation tree from a registration pass
pub fn build_navigation_tree(
    root_title: &str,
    registrations: impl IntoIterator<Item = ExampleRegistration>,
) -> DemoNode {
    let mut root = DemoNode::category(root_title);
    for registration in registrations {
        if !registration.presentable {
            tracing::debug!(path = ?registration.breadcrumbs, "skipping non-presentable example");
            continue;
        }
        let Some((leaf_title, categories)) = registration.breadcrumbs.split_last() else {
            tracing::warn!("skipping example registered without breadcrumbs");
            continue;
        };

        let mut parent = &mut root;
        for title in categories {
            let position = parent
                .children
                .iter()
                .position(|c| !c.is_example() && c.title == *title);
            let index = match position {
                Some(index) => index,
                None => {
                    parent.children.push(DemoNode::category(title.clone()));
                    parent.children.len() - 1
                }
            };
            parent = &mut parent.children[index];
        }

        parent.children.push(DemoNode {
            title: leaf_title.clone(),
            example: Some(ExampleInfo {
                description: registration.description,
                primary_demo: registration.primary_demo,
                debug: registration.debug,
                factory: registration.factory,
            }),
            children: Vec::new(),
        });
    }
    root
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Blank;

    impl Themeable for Blank {}

    impl ExampleController for Blank {
        fn title(&self) -> &str {
            "Blank"
        }

        fn summary(&self) -> String {
            String::new()
        }
    }

    fn blank() -> Box<dyn ExampleController> {
        Box::new(Blank)
    }

    #[test]
    fn test_breadcrumbs_build_categories_in_registration_order() {
        let tree = build_navigation_tree(
            "Root",
            vec![
                ExampleRegistration::new(&["Cards", "Card"], blank).primary_demo(),
                ExampleRegistration::new(&["Buttons", "FAB"], blank),
                ExampleRegistration::new(&["Buttons", "Buttons"], blank).primary_demo(),
            ],
        );

        let titles: Vec<_> = tree.children().iter().map(|c| c.title()).collect();
        assert_eq!(titles, vec!["Cards", "Buttons"]);

        let buttons = tree.child("Buttons").unwrap();
        assert!(!buttons.is_example());
        let leaves: Vec<_> = buttons.children().iter().map(|c| c.title()).collect();
        assert_eq!(leaves, vec!["FAB", "Buttons"]);
        assert!(buttons.children()[1].is_primary_demo());
    }

    #[test]
    fn test_hidden_and_empty_registrations_are_skipped() {
        let tree = build_navigation_tree(
            "Root",
            vec![
                ExampleRegistration::new(&["Slider", "Stress"], blank).hidden(),
                ExampleRegistration::new(&[], blank),
            ],
        );
        assert!(tree.children().is_empty());
    }

    #[test]
    fn test_find_and_descendants() {
        let tree = build_navigation_tree(
            "Root",
            vec![ExampleRegistration::new(&["Themes", "Preview themes"], blank)
                .description("Live scheme editing")
                .debug()],
        );
        let leaf = tree.find(&["Themes", "Preview themes"]).unwrap();
        assert!(leaf.is_example());
        assert!(leaf.is_debug());
        assert_eq!(leaf.example_description(), Some("Live scheme editing"));
        assert!(leaf.create_example_controller().is_some());
        assert!(tree.find(&["Themes", "Missing"]).is_none());

        let listing: Vec<_> = tree
            .descendants()
            .into_iter()
            .map(|(depth, n)| (depth, n.title()))
            .collect();
        assert_eq!(listing, vec![(0, "Themes"), (1, "Preview themes")]);
        assert!(tree.create_example_controller().is_none());
    }
}
