//! Selection engine: turns an origin plus selectors into a result set.
//!
//! Resolution never fails. Missing origins, unusable selectors and malformed
//! trees all degrade to empty or partial results.

use crate::matcher::matches_any;
use crate::selector::is_blank_list;
use crate::traversal::flatten_all;
use crate::{Origin, QueryConfig, Selector};
use log::{debug, warn};
use rustc_hash::FxHashSet;
use view_node::ViewTree;

/// Traversal roots: the parent query's results when scoped, otherwise the
/// origin's view.
pub fn traversal_roots<N: Copy>(origin: &Origin<N>, parent_results: Option<&[N]>) -> Vec<N> {
    parent_results.map_or_else(|| origin.view().into_iter().collect(), <[N]>::to_vec)
}

/// Resolve `selectors` against the tree.
///
/// 1. A blank list selects the origin's view, if any.
/// 2. Direct references are emitted first, in list order.
/// 3. Remaining criteria are matched against every descendant of the
///    traversal roots, in traversal order.
///
/// `roots` is only called when step 3 runs.
pub fn resolve<T, R>(
    tree: &T,
    origin: &Origin<T::Node>,
    selectors: &[Selector<T::Node>],
    config: &QueryConfig,
    roots: R,
) -> Vec<T::Node>
where
    T: ViewTree,
    R: FnOnce() -> Vec<T::Node>,
{
    if is_blank_list(selectors) {
        let selected: Vec<T::Node> = origin.view().into_iter().collect();
        debug!(target: "view_query", "blank selectors; selected origin view {selected:?}");
        return selected;
    }

    let (direct, criteria): (Vec<&Selector<T::Node>>, Vec<&Selector<T::Node>>) =
        selectors.iter().partition(|selector| selector.as_node().is_some());

    let mut selected: Vec<T::Node> = direct
        .iter()
        .filter_map(|selector| selector.as_node().copied())
        .collect();

    for selector in &criteria {
        if let Selector::Unknown(raw) = selector {
            warn!(target: "view_query", "ignoring unrecognized selector {raw:?}");
        }
    }

    if !is_blank_list(criteria.iter().copied()) {
        let roots = roots();
        let candidates = flatten_all(tree, &roots);
        debug!(
            target: "view_query",
            "matching {} criteria against {} descendants of {} roots",
            criteria.len(),
            candidates.len(),
            roots.len()
        );
        selected.extend(
            candidates
                .into_iter()
                .filter(|candidate| matches_any(tree, *candidate, criteria.iter().copied())),
        );
    }

    if config.dedupe_results {
        dedupe(tree, &mut selected);
    }
    selected
}

/// Keep the first occurrence of each view identity.
pub(crate) fn dedupe<T: ViewTree>(tree: &T, selected: &mut Vec<T::Node>) {
    let mut seen = FxHashSet::default();
    selected.retain(|node| seen.insert(tree.identity(*node)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::FixtureTree;
    use view_node::ViewData;

    fn run(
        tree: &FixtureTree,
        origin: &Origin<usize>,
        parent_results: Option<&[usize]>,
        selectors: &[Selector<usize>],
        config: &QueryConfig,
    ) -> Vec<usize> {
        resolve(tree, origin, selectors, config, || {
            traversal_roots(origin, parent_results)
        })
    }

    /// root: [header, body], body: [button, label]
    fn fixture() -> (FixtureTree, [usize; 5]) {
        let mut tree = FixtureTree::new();
        let root = tree.add("LinearLayout", ViewData::new());
        let header = tree.add("TextView", ViewData::new().with_tag("title"));
        let body = tree.add("LinearLayout", ViewData::new().with_style("body"));
        let button = tree.add("Button", ViewData::new().with_tag("title"));
        let label = tree.add("TextView", ViewData::new());
        tree.link(root, header);
        tree.link(root, body);
        tree.link(body, button);
        tree.link(body, label);
        (tree, [root, header, body, button, label])
    }

    #[test]
    fn blank_list_selects_origin_view() {
        let (tree, [root, ..]) = fixture();
        let config = QueryConfig::default();
        assert_eq!(
            run(&tree, &Origin::View(root), None, &[], &config),
            vec![root]
        );
        assert_eq!(
            run(&tree, &Origin::View(root), None, &[Selector::tag("")], &config),
            vec![root]
        );
        assert!(run(&tree, &Origin::None, None, &[], &config).is_empty());
    }

    #[test]
    fn direct_references_come_first() {
        let (tree, [root, header, _, button, label]) = fixture();
        let selectors = vec![Selector::tag("title"), Selector::Node(label)];
        let selected = run(
            &tree,
            &Origin::View(root),
            None,
            &selectors,
            &QueryConfig::default(),
        );
        assert_eq!(selected, vec![label, header, button]);
    }

    #[test]
    fn direct_reference_survives_unmatched_criteria() {
        let (tree, [root, header, ..]) = fixture();
        let selectors = vec![Selector::Node(header), Selector::tag("nothing")];
        assert_eq!(
            run(&tree, &Origin::View(root), None, &selectors, &QueryConfig::default()),
            vec![header]
        );
    }

    #[test]
    fn duplicates_are_kept_unless_configured() {
        let (tree, [root, header, _, button, _]) = fixture();
        let selectors = vec![Selector::Node(header), Selector::tag("title")];

        let kept = run(&tree, &Origin::View(root), None, &selectors, &QueryConfig::new(false));
        assert_eq!(kept, vec![header, header, button]);

        let deduped = run(&tree, &Origin::View(root), None, &selectors, &QueryConfig::new(true));
        assert_eq!(deduped, vec![header, button]);
    }

    #[test]
    fn parent_results_replace_origin_as_roots() {
        let (tree, [root, _, body, button, label]) = fixture();
        let selectors = vec![Selector::kind("TextView")];
        let scoped = run(
            &tree,
            &Origin::View(root),
            Some(&[body][..]),
            &selectors,
            &QueryConfig::default(),
        );
        assert_eq!(scoped, vec![button, label]);
    }

    #[test]
    fn no_origin_yields_only_direct_references() {
        let (tree, [_, header, ..]) = fixture();
        let selectors = vec![Selector::Node(header), Selector::tag("title")];
        assert_eq!(
            run(&tree, &Origin::None, None, &selectors, &QueryConfig::default()),
            vec![header]
        );
    }

    #[test]
    fn blank_only_lists_skip_traversal() {
        let (tree, [root, ..]) = fixture();
        let selectors = vec![Selector::Unknown("42.0".into()), Selector::style("")];
        let selected = run(&tree, &Origin::View(root), None, &selectors, &QueryConfig::default());
        assert_eq!(selected, vec![root]);
        assert_eq!(tree.child_count_calls(), 0);
    }

    #[test]
    fn unknown_criteria_beside_references_are_ignored() {
        let (tree, [root, header, ..]) = fixture();
        let selectors = vec![Selector::Unknown("{}".into()), Selector::Node(header)];
        let selected = run(&tree, &Origin::View(root), None, &selectors, &QueryConfig::default());
        assert_eq!(selected, vec![header]);
        assert_eq!(tree.child_count_calls(), 0);
    }

    #[test]
    fn roots_follow_parent_then_origin() {
        assert_eq!(traversal_roots(&Origin::View(1_usize), Some(&[5, 6][..])), vec![5, 6]);
        assert_eq!(traversal_roots(&Origin::View(1_usize), None), vec![1]);
        assert!(traversal_roots::<usize>(&Origin::None, None).is_empty());
    }
}
