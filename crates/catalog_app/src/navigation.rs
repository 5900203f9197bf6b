//! Catalog navigation
//!
//! [`CatalogNavigator`] is the screen stack of the catalog app. The root
//! screen is the components grid; picking a grid item pushes either the
//! example itself or a list of the node's demos. Example controllers are
//! themed with the app container scheme when they are created.

use crate::error::{CatalogError, Result};
use crate::grid::CatalogCell;
use crate::node::{DemoNode, ExampleController};
use crate::selection::{component_description, select_demos};
use catalog_core::Color;
use catalog_theme::{apply_container_scheme, ContainerScheme, FontStyle};
use std::fmt;

/// Bar button shown on every screen, the components grid included
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuButton {
    pub accessibility_label: &'static str,
    pub accessibility_hint: &'static str,
}

impl MenuButton {
    pub const fn catalog() -> Self {
        Self {
            accessibility_label: "Menu",
            accessibility_hint: "Opens catalog configuration options.",
        }
    }
}

pub enum Screen {
    /// Components grid, titled after the catalog root
    Components { title: String },
    /// Demos of a category node, addressed by child indices from the root
    NodeList {
        path: Vec<usize>,
        title: String,
        description: String,
    },
    Example {
        title: String,
        controller: Box<dyn ExampleController>,
    },
}

impl Screen {
    pub fn title(&self) -> &str {
        match self {
            Screen::Components { title }
            | Screen::NodeList { title, .. }
            | Screen::Example { title, .. } => title,
        }
    }

    pub fn menu_button(&self) -> MenuButton {
        MenuButton::catalog()
    }

    pub fn controller(&self) -> Option<&dyn ExampleController> {
        match self {
            Screen::Example { controller, .. } => Some(controller.as_ref()),
            _ => None,
        }
    }
}

impl fmt::Debug for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::Components { title } => {
                f.debug_struct("Components").field("title", title).finish()
            }
            Screen::NodeList { path, title, .. } => f
                .debug_struct("NodeList")
                .field("path", path)
                .field("title", title)
                .finish(),
            Screen::Example { title, .. } => {
                f.debug_struct("Example").field("title", title).finish()
            }
        }
    }
}

/// Navigation bar styling derived from the app container scheme
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationBarAppearance {
    pub background: Color,
    pub title_color: Color,
    pub tint: Color,
    pub title_font: FontStyle,
    pub large_title_font: FontStyle,
    pub root_background: Color,
}

impl NavigationBarAppearance {
    pub fn from_container(scheme: &ContainerScheme) -> Self {
        let colors = &scheme.color_scheme;
        let fonts = &scheme.typography_scheme;
        Self {
            background: colors.primary,
            title_color: colors.on_primary,
            tint: colors.on_primary,
            title_font: fonts.headline6.clone(),
            large_title_font: fonts.headline5.clone(),
            root_background: colors.background,
        }
    }
}

pub struct CatalogNavigator {
    tree: DemoNode,
    container: ContainerScheme,
    stack: Vec<Screen>,
    menu_visible: bool,
}

impl CatalogNavigator {
    pub fn new(tree: DemoNode, container: ContainerScheme) -> Self {
        let root = Screen::Components {
            title: tree.title().to_string(),
        };
        Self {
            tree,
            container,
            stack: vec![root],
            menu_visible: false,
        }
    }

    pub fn tree(&self) -> &DemoNode {
        &self.tree
    }

    pub fn container_scheme(&self) -> &ContainerScheme {
        &self.container
    }

    pub fn bar_appearance(&self) -> NavigationBarAppearance {
        NavigationBarAppearance::from_container(&self.container)
    }

    /// One cell per top-level node
    pub fn grid_cells(&self) -> Vec<CatalogCell> {
        self.tree
            .children()
            .iter()
            .map(|node| CatalogCell::new(node.title()))
            .collect()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn top(&self) -> &Screen {
        // the root screen is never popped
        &self.stack[self.stack.len() - 1]
    }

    pub fn stack(&self) -> &[Screen] {
        &self.stack
    }

    /// Open the top-level node at `index`
    pub fn select_grid_item(&mut self, index: usize) -> Result<&Screen> {
        let children = self.tree.children();
        let node = children.get(index).ok_or(CatalogError::NoSuchItem {
            index,
            len: children.len(),
        })?;

        let screen = if node.is_example() {
            self.example_screen(node)?
        } else {
            Screen::NodeList {
                path: vec![index],
                title: node.title().to_string(),
                description: component_description(node),
            }
        };
        Ok(self.push(screen))
    }

    /// Open the demo at `index` of the node list on top of the stack
    pub fn select_demo(&mut self, index: usize) -> Result<&Screen> {
        let node = self.current_node().ok_or(CatalogError::NotANodeList)?;
        let demos = select_demos(node);
        let demo = demos.get(index).ok_or(CatalogError::NoSuchItem {
            index,
            len: demos.len(),
        })?;
        let screen = self.example_screen(demo)?;
        Ok(self.push(screen))
    }

    /// Rows of the node list on top of the stack, primary demos first
    pub fn demo_rows(&self) -> Result<Vec<&DemoNode>> {
        self.current_node()
            .map(select_demos)
            .ok_or(CatalogError::NotANodeList)
    }

    /// Open a top-level node by title
    pub fn open(&mut self, title: &str) -> Result<&Screen> {
        let index = self
            .tree
            .children()
            .iter()
            .position(|c| c.title() == title)
            .ok_or_else(|| CatalogError::UnknownComponent(title.to_string()))?;
        self.select_grid_item(index)
    }

    /// Pop the top screen; the components grid always stays
    pub fn pop(&mut self) -> Option<Screen> {
        if self.stack.len() <= 1 {
            return None;
        }
        self.menu_visible = false;
        self.stack.pop()
    }

    /// Show the catalog menu sheet over the top screen
    pub fn present_menu(&mut self) -> MenuButton {
        self.menu_visible = true;
        self.top().menu_button()
    }

    pub fn dismiss_menu(&mut self) {
        self.menu_visible = false;
    }

    pub fn is_menu_visible(&self) -> bool {
        self.menu_visible
    }

    fn current_node(&self) -> Option<&DemoNode> {
        match self.top() {
            Screen::NodeList { path, .. } => path
                .iter()
                .try_fold(&self.tree, |node, &i| node.children().get(i)),
            _ => None,
        }
    }

    fn example_screen(&self, node: &DemoNode) -> Result<Screen> {
        let mut controller = node
            .create_example_controller()
            .ok_or_else(|| CatalogError::UnknownComponent(node.title().to_string()))?;
        apply_container_scheme(controller.as_mut(), &self.container);
        tracing::debug!(example = node.title(), "example controller themed");
        Ok(Screen::Example {
            title: node.title().to_string(),
            controller,
        })
    }

    fn push(&mut self, screen: Screen) -> &Screen {
        tracing::debug!(screen = screen.title(), depth = self.stack.len() + 1, "push");
        self.menu_visible = false;
        self.stack.push(screen);
        self.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demos::catalog_registrations;
    use crate::node::build_navigation_tree;
    use catalog_theme::{ColorScheme, TypographyScheme};

    fn navigator() -> CatalogNavigator {
        CatalogNavigator::new(
            build_navigation_tree("Catalog", catalog_registrations()),
            ContainerScheme::default(),
        )
    }

    #[test]
    fn test_root_is_components_grid() {
        let mut nav = navigator();
        assert!(matches!(nav.top(), Screen::Components { .. }));
        assert_eq!(nav.top().title(), "Catalog");
        assert!(nav.pop().is_none());
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.grid_cells()[1].title(), "Buttons");
    }

    #[test]
    fn test_category_pushes_node_list_with_primary_first() {
        let mut nav = navigator();
        let screen = nav.open("Buttons").unwrap();
        match screen {
            Screen::NodeList { description, .. } => {
                assert!(description.starts_with("Buttons allow users"));
            }
            other => panic!("unexpected screen {other:?}"),
        }
        let rows: Vec<_> = nav.demo_rows().unwrap().iter().map(|d| d.title()).collect();
        assert_eq!(rows, vec!["Buttons", "Floating Action Button"]);

        let example = nav.select_demo(1).unwrap();
        assert_eq!(example.title(), "Floating Action Button");
        assert_eq!(nav.depth(), 3);
        assert!(matches!(nav.select_demo(0), Err(CatalogError::NotANodeList)));
    }

    #[test]
    fn test_selected_example_is_themed() {
        let container = ContainerScheme::new(ColorScheme::dark(), TypographyScheme::baseline());
        let mut nav = CatalogNavigator::new(
            build_navigation_tree("Catalog", catalog_registrations()),
            container,
        );
        nav.open("Cards").unwrap();
        let screen = nav.select_demo(0).unwrap();
        let summary = screen.controller().unwrap().summary();
        assert!(summary.contains(&format!("bg={}", ColorScheme::dark().surface)));
    }

    #[test]
    fn test_out_of_range_selection() {
        let mut nav = navigator();
        assert!(matches!(
            nav.select_grid_item(99),
            Err(CatalogError::NoSuchItem { index: 99, len: 6 })
        ));
        nav.select_grid_item(0).unwrap();
        assert!(matches!(
            nav.select_demo(5),
            Err(CatalogError::NoSuchItem { index: 5, len: 1 })
        ));
        assert!(matches!(
            nav.open("Tabs"),
            Err(CatalogError::UnknownComponent(_))
        ));
    }

    #[test]
    fn test_menu_on_root_screen() {
        let mut nav = navigator();
        let button = nav.present_menu();
        assert_eq!(button.accessibility_label, "Menu");
        assert!(nav.is_menu_visible());
        assert!(nav.pop().is_none());
        assert!(nav.is_menu_visible());
        nav.dismiss_menu();
        assert!(!nav.is_menu_visible());
    }

    #[test]
    fn test_menu_on_pushed_screens() {
        let mut nav = navigator();
        nav.open("Slider").unwrap();
        let button = nav.top().menu_button();
        assert_eq!(button.accessibility_label, "Menu");
        assert_eq!(button.accessibility_hint, "Opens catalog configuration options.");

        assert_eq!(nav.present_menu(), MenuButton::catalog());
        assert!(nav.is_menu_visible());
        nav.dismiss_menu();
        assert!(!nav.is_menu_visible());

        nav.present_menu();
        nav.pop();
        assert!(!nav.is_menu_visible());
        assert!(matches!(nav.top(), Screen::Components { .. }));
    }

    #[test]
    fn test_bar_appearance_from_container() {
        let appearance = navigator().bar_appearance();
        let colors = ColorScheme::baseline();
        assert_eq!(appearance.background, colors.primary);
        assert_eq!(appearance.title_color, colors.on_primary);
        assert_eq!(appearance.tint, colors.on_primary);
        assert_eq!(appearance.title_font.size, 20.0);
        assert_eq!(appearance.large_title_font.size, 24.0);
        assert_eq!(appearance.root_background, colors.background);
    }
}
