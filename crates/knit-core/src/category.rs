//! Static garment category taxonomy
//!
//! Three levels: product group, garment group, garment. The tree is fixed at
//! compile time; rules and templates reference leaf categories by numeric id.

use serde::Serialize;

/// A node in the category tree
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Category {
    pub id: u32,
    pub parent_id: Option<u32>,
    pub name: &'static str,
    pub children: Vec<Category>,
}

impl Category {
    fn leaf(id: u32, parent_id: u32, name: &'static str) -> Self {
        Self {
            id,
            parent_id: Some(parent_id),
            name,
            children: Vec::new(),
        }
    }

    fn node(id: u32, parent_id: Option<u32>, name: &'static str, children: Vec<Category>) -> Self {
        Self {
            id,
            parent_id,
            name,
            children,
        }
    }

    /// The full category tree
    pub fn tree() -> Vec<Category> {
        vec![
            Category::node(
                1,
                None,
                "의류",
                vec![
                    Category::node(
                        10,
                        Some(1),
                        "상의",
                        vec![
                            Category::leaf(103, 10, "스웨터"),
                            Category::leaf(104, 10, "가디건"),
                        ],
                    ),
                    Category::node(
                        11,
                        Some(1),
                        "하의",
                        vec![
                            Category::leaf(201, 11, "바지"),
                            Category::leaf(202, 11, "스커트"),
                        ],
                    ),
                ],
            ),
            Category::node(
                2,
                None,
                "소품류",
                vec![
                    Category::node(
                        20,
                        Some(2),
                        "모자류",
                        vec![
                            Category::leaf(301, 20, "비니"),
                            Category::leaf(302, 20, "바라클라바"),
                        ],
                    ),
                    Category::node(
                        21,
                        Some(2),
                        "가방류",
                        vec![
                            Category::leaf(311, 21, "숄더백"),
                            Category::leaf(312, 21, "크로스백"),
                            Category::leaf(313, 21, "파우치"),
                        ],
                    ),
                    Category::node(
                        22,
                        Some(2),
                        "손/발 ACC",
                        vec![
                            Category::leaf(321, 22, "장갑"),
                            Category::leaf(322, 22, "양말"),
                        ],
                    ),
                    Category::node(
                        23,
                        Some(2),
                        "목/몸 ACC",
                        vec![
                            Category::leaf(331, 23, "목도리"),
                            Category::leaf(332, 23, "숄"),
                        ],
                    ),
                    Category::node(24, Some(2), "기타", vec![Category::leaf(341, 24, "인형")]),
                ],
            ),
        ]
    }

    /// Depth-first flatten of the whole tree
    pub fn flattened() -> Vec<Category> {
        fn walk(nodes: &[Category], out: &mut Vec<Category>) {
            for node in nodes {
                out.push(node.clone());
                walk(&node.children, out);
            }
        }

        let mut out = Vec::new();
        walk(&Category::tree(), &mut out);
        out
    }

    /// Find a category by id anywhere in the tree
    pub fn find(id: u32) -> Option<Category> {
        Category::flattened().into_iter().find(|c| c.id == id)
    }

    /// Ancestor chain for a category, ordered root-first.
    ///
    /// Empty for root categories and unknown ids.
    pub fn ancestors(id: u32) -> Vec<Category> {
        let mut chain = Vec::new();
        let mut current = Category::find(id);

        while let Some(cat) = current {
            match cat.parent_id.and_then(Category::find) {
                Some(parent) => {
                    chain.insert(0, parent.clone());
                    current = Some(parent);
                }
                None => break,
            }
        }

        chain
    }

    /// The `[major, mid, minor]` id path ending at `id`
    pub fn path_ids(id: u32) -> Vec<u32> {
        let mut ids: Vec<u32> = Category::ancestors(id).iter().map(|c| c.id).collect();
        if Category::find(id).is_some() {
            ids.push(id);
        }
        ids
    }

    /// Render the path as "의류 > 상의 > 스웨터"
    pub fn path_label(id: u32) -> String {
        let mut names: Vec<&str> = Category::ancestors(id).iter().map(|c| c.name).collect();
        if let Some(cat) = Category::find(id) {
            names.push(cat.name);
        }
        names.join(" > ")
    }

    /// Top-level categories
    pub fn roots() -> Vec<Category> {
        Category::tree()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_contains_all_levels() {
        let flat = Category::flattened();
        assert!(flat.iter().any(|c| c.id == 1));
        assert!(flat.iter().any(|c| c.id == 10));
        assert!(flat.iter().any(|c| c.id == 103));
        assert!(flat.iter().any(|c| c.id == 341));
    }

    #[test]
    fn test_find() {
        let sweater = Category::find(103).unwrap();
        assert_eq!(sweater.name, "스웨터");
        assert_eq!(sweater.parent_id, Some(10));
        assert!(Category::find(999).is_none());
    }

    #[test]
    fn test_ancestors_root_first() {
        let chain = Category::ancestors(103);
        let ids: Vec<u32> = chain.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 10]);
    }

    #[test]
    fn test_ancestors_of_root_and_unknown_are_empty() {
        assert!(Category::ancestors(1).is_empty());
        assert!(Category::ancestors(999).is_empty());
    }

    #[test]
    fn test_path_ids() {
        assert_eq!(Category::path_ids(103), vec![1, 10, 103]);
        assert_eq!(Category::path_ids(301), vec![2, 20, 301]);
        assert!(Category::path_ids(999).is_empty());
    }

    #[test]
    fn test_path_label() {
        assert_eq!(Category::path_label(103), "의류 > 상의 > 스웨터");
    }
}
