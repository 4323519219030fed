//! Collectors over sidebar trees.
//!
//! All collectors walk the tree pre-order: a category is visited before its
//! children, and siblings are visited in the order they are listed.

use crate::types::{Sidebar, SidebarItem, SidebarItemCategory, SidebarItemLink};

/// Visit every item of `items` (recursively) in pre-order.
fn walk<'a>(items: &'a [SidebarItem], visit: &mut impl FnMut(&'a SidebarItem)) {
    for item in items {
        visit(item);
        if let SidebarItem::Category(category) = item {
            walk(&category.items, visit);
        }
    }
}

/// Collect every category of a sidebar, in tree order.
///
/// # Examples
///
/// ```
/// use folio_sidebar::{collect_sidebar_categories, SidebarItem, SidebarItemCategory};
///
/// let sidebar = vec![SidebarItem::Category(SidebarItemCategory::new(
///     "Outer",
///     vec![SidebarItem::Category(SidebarItemCategory::new("Inner", vec![]))],
/// ))];
///
/// let labels: Vec<_> = collect_sidebar_categories(&sidebar)
///     .iter()
///     .map(|c| c.label.as_str())
///     .collect();
/// assert_eq!(labels, ["Outer", "Inner"]);
/// ```
pub fn collect_sidebar_categories(sidebar: &Sidebar) -> Vec<&SidebarItemCategory> {
    let mut categories = Vec::new();
    walk(sidebar, &mut |item| {
        if let SidebarItem::Category(category) = item {
            categories.push(category);
        }
    });
    categories
}

/// Collect the id of every doc item of a sidebar, in tree order.
///
/// Category links pointing at a doc are included, right where the category
/// itself appears.
pub fn collect_sidebar_doc_ids(sidebar: &Sidebar) -> Vec<&str> {
    let mut ids = Vec::new();
    walk(sidebar, &mut |item| match item {
        SidebarItem::Doc(doc) => ids.push(doc.id.as_str()),
        SidebarItem::Category(category) => {
            if let Some(crate::CategoryLink::Doc(link)) = &category.link {
                ids.push(link.id.as_str());
            }
        }
        _ => {}
    });
    ids
}

/// Collect every link item of a sidebar, in tree order.
pub fn collect_sidebar_links(sidebar: &Sidebar) -> Vec<&SidebarItemLink> {
    let mut links = Vec::new();
    walk(sidebar, &mut |item| {
        if let SidebarItem::Link(link) = item {
            links.push(link);
        }
    });
    links
}
