//! Navigation menu tree delivered with the profile. The backend may omit or
//! null out `children`; normalization guarantees every node carries a
//! (possibly empty) children vector, recursively.

use super::types::null_as_empty;
use serde::{Deserialize, Serialize};

/// Menu entry as received from the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub permission_name: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub order: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub children: Option<Vec<MenuItem>>,
}

/// Normalized menu entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuNode {
    pub id: String,
    pub icon: Option<String>,
    pub name: String,
    pub url: String,
    #[serde(rename = "permission_name")]
    pub required_permission: Option<String>,
    pub parent_id: Option<String>,
    pub order: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    /// Number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(MenuNode::node_count).sum::<usize>()
    }

    /// Finds the first node in this subtree whose URL matches.
    #[must_use]
    pub fn find_by_url(&self, url: &str) -> Option<&MenuNode> {
        if self.url == url {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_by_url(url))
    }
}

impl From<MenuItem> for MenuNode {
    fn from(item: MenuItem) -> Self {
        Self {
            id: item.id,
            icon: item.icon,
            name: item.name,
            url: item.url,
            required_permission: item.permission_name,
            parent_id: item.parent_id,
            order: item.order,
            children: normalize(item.children.unwrap_or_default()),
        }
    }
}

impl From<MenuNode> for MenuItem {
    fn from(node: MenuNode) -> Self {
        Self {
            id: node.id,
            icon: node.icon,
            name: node.name,
            url: node.url,
            permission_name: node.required_permission,
            parent_id: node.parent_id,
            order: node.order,
            created_at: None,
            updated_at: None,
            children: Some(node.children.into_iter().map(MenuItem::from).collect()),
        }
    }
}

/// Normalizes a forest, keeping the backend's ordering.
#[must_use]
pub fn normalize(items: Vec<MenuItem>) -> Vec<MenuNode> {
    items.into_iter().map(MenuNode::from).collect()
}

/// First node in the forest whose URL is `url`; blank URLs never match.
#[must_use]
pub fn find_by_url<'a>(nodes: &'a [MenuNode], url: &str) -> Option<&'a MenuNode> {
    if url.is_empty() {
        return None;
    }
    nodes.iter().find_map(|node| node.find_by_url(url))
}

/// Total node count across a forest.
#[must_use]
pub fn count(nodes: &[MenuNode]) -> usize {
    nodes.iter().map(MenuNode::node_count).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_tree() -> Vec<MenuItem> {
        serde_json::from_value(json!([
            {
                "id": "m-1",
                "icon": "dashboard",
                "name": "Dashboard",
                "url": "/dashboard",
                "permission_name": null,
                "parent_id": null,
                "order": 1
            },
            {
                "id": "m-2",
                "icon": "article",
                "name": "CMS",
                "url": "/dashboard/cms",
                "permission_name": "cms.view",
                "parent_id": null,
                "order": 2,
                "children": [
                    {
                        "id": "m-3",
                        "icon": null,
                        "name": "News",
                        "url": "/dashboard/news",
                        "permission_name": "news.view",
                        "parent_id": "m-2",
                        "order": 1,
                        "children": null
                    }
                ]
            }
        ]))
        .unwrap()
    }

    #[test]
    fn normalize_fills_missing_and_null_children() {
        let nodes = normalize(raw_tree());
        assert_eq!(nodes.len(), 2);
        assert!(nodes[0].children.is_empty());
        assert_eq!(nodes[1].children.len(), 1);
        assert!(nodes[1].children[0].children.is_empty());
        assert_eq!(
            nodes[1].children[0].required_permission.as_deref(),
            Some("news.view")
        );
        assert_eq!(count(&nodes), 3);
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize(raw_tree());
        let twice = normalize(once.clone().into_iter().map(MenuItem::from).collect());
        assert_eq!(once, twice);
    }

    #[test]
    fn normalize_keeps_backend_order() {
        let nodes = normalize(raw_tree());
        let ids: Vec<&str> = nodes.iter().map(|node| node.id.as_str()).collect();
        assert_eq!(ids, ["m-1", "m-2"]);
    }

    #[test]
    fn find_by_url_walks_children() {
        let nodes = normalize(raw_tree());
        let found = find_by_url(&nodes, "/dashboard/news").unwrap();
        assert_eq!(found.name, "News");
        assert!(found.children.is_empty());
        assert!(find_by_url(&nodes, "").is_none());
        assert!(find_by_url(&nodes, "/dashboard/unknown").is_none());
    }
}
