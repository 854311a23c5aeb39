use famtree_core::{
    ChoiceOutcome, Gesture, Link, LinkStyle, NodeId, NodeStyle, PersonRecord, Point,
    SearchOutcome, TreeNode, TreeRenderer, TreeView, ViewSettings, ViewportTransform,
};
use std::collections::HashSet;
use std::time::Duration;

#[derive(Default)]
struct Recorder {
    transform: Option<ViewportTransform>,
    links: Vec<(Link, LinkStyle)>,
    nodes: Vec<(String, NodeStyle)>,
    labels: Vec<String>,
}

impl TreeRenderer for Recorder {
    fn set_transform(&mut self, transform: ViewportTransform) {
        self.transform = Some(transform);
    }

    fn draw_link(&mut self, link: Link, _from: Point, _to: Point, style: LinkStyle) {
        self.links.push((link, style));
    }

    fn draw_node(&mut self, node: &TreeNode, _at: Point, style: NodeStyle) {
        self.nodes.push((node.name.clone(), style));
    }

    fn draw_link_label(&mut self, _link: Link, _at: Point, text: &str) {
        self.labels.push(text.to_string());
    }
}

fn family() -> PersonRecord {
    PersonRecord::from_json_str(
        r#"{
            "name": "Root",
            "children": [
                { "name": "A", "comment": "eldest", "children": [
                    { "name": "B", "born": "1950" },
                    { "name": "C" }
                ]}
            ]
        }"#,
    )
    .expect("family json")
}

fn view(rec: &PersonRecord) -> TreeView {
    TreeView::new(rec, ViewSettings::default(), 960.0, 640.0)
}

fn run_animation(v: &mut TreeView) {
    v.tick(Duration::ZERO);
    v.tick(Duration::from_secs(5));
}

fn name_of(v: &TreeView, id: NodeId) -> String {
    v.tree().node(id).map(|n| n.name.clone()).unwrap_or_default()
}

#[test]
fn single_match_highlights_path_and_centres_target() {
    let mut v = view(&family());
    let SearchOutcome::Highlighted(b) = v.search("b") else {
        panic!("expected a single match");
    };
    assert_eq!(name_of(&v, b), "B");

    let names: HashSet<String> = v
        .highlight()
        .on_path_nodes()
        .iter()
        .map(|id| name_of(&v, *id))
        .collect();
    assert_eq!(names, HashSet::from(["B".to_string(), "A".to_string(), "Root".to_string()]));

    let edges: HashSet<(String, String)> = v
        .highlight()
        .on_path_links()
        .iter()
        .map(|l| (name_of(&v, l.parent), name_of(&v, l.child)))
        .collect();
    assert_eq!(
        edges,
        HashSet::from([
            ("Root".to_string(), "A".to_string()),
            ("A".to_string(), "B".to_string())
        ])
    );

    run_animation(&mut v);
    let anchor = v.tree().anchor(b).expect("anchor");
    let screen = v.viewport().to_screen(anchor);
    assert!((screen.x - 480.0).abs() < 1e-2);
    assert!((screen.y - 320.0).abs() < 1e-2);
    assert!((v.transform().k - 1.2).abs() < 1e-6);

    let mut out = Recorder::default();
    v.render(&mut out);
    assert_eq!(out.transform, Some(v.transform()));
    assert_eq!(out.labels, vec!["eldest".to_string()]);
    let on_path_links = out
        .links
        .iter()
        .filter(|(_, s)| *s == LinkStyle::OnPath)
        .count();
    assert_eq!(on_path_links, 2);
    assert!(out.nodes.contains(&("B".to_string(), NodeStyle::Target)));
    assert!(out.nodes.contains(&("A".to_string(), NodeStyle::OnPath)));
    assert!(out.nodes.contains(&("C".to_string(), NodeStyle::Normal)));
}

#[test]
fn case_variants_still_match() {
    let mut v = view(&family());
    assert!(matches!(v.search("  rOOt "), SearchOutcome::Highlighted(NodeId(0))));
}

#[test]
fn duplicate_names_need_a_choice_in_insertion_order() {
    let rec = PersonRecord::new("Root").with_children(vec![
        PersonRecord::new("Sam"),
        PersonRecord::new("Kim").with_children(vec![PersonRecord::new("sam")]),
    ]);
    let mut v = view(&rec);
    let before = v.transform();

    let SearchOutcome::NeedsChoice(candidates) = v.search("SAM") else {
        panic!("expected ambiguity");
    };
    assert_eq!(candidates.len(), 2);
    assert_ne!(candidates[0].lineage, candidates[1].lineage);
    assert_eq!(candidates[0].lineage, "Root → Sam");
    assert_eq!(candidates[1].lineage, "Root → Kim → sam");
    assert!(v.highlight().is_empty());

    // Same query, same order.
    let SearchOutcome::NeedsChoice(again) = v.search("sam") else {
        panic!("expected ambiguity");
    };
    assert_eq!(again, candidates);

    assert_eq!(v.choose(Some(7)), ChoiceOutcome::Dismissed);
    assert!(v.highlight().is_empty());
    assert_eq!(v.transform(), before);
    assert!(!v.viewport().is_animating());

    v.search("sam");
    assert_eq!(v.choose(None), ChoiceOutcome::Dismissed);
    assert!(v.highlight().is_empty());

    v.search("sam");
    let picked = candidates[1].node;
    assert_eq!(v.choose(Some(1)), ChoiceOutcome::Highlighted(picked));
    assert!(v.highlight().is_target(picked));
    assert_eq!(v.highlight().on_path_nodes().len(), 3);
}

#[test]
fn empty_and_absent_queries_leave_state_alone() {
    let mut v = view(&family());
    v.search("c");
    run_animation(&mut v);
    let highlight = v.highlight().clone();
    let transform = v.transform();

    assert_eq!(v.search(""), SearchOutcome::Ignored);
    assert_eq!(v.search("   \t"), SearchOutcome::Ignored);
    assert_eq!(
        v.search(" zzz "),
        SearchOutcome::NotFound {
            query: "zzz".to_string()
        }
    );
    assert_eq!(v.highlight(), &highlight);
    assert_eq!(v.transform(), transform);
    assert!(!v.viewport().is_animating());
}

#[test]
fn reset_restores_identity_and_clears_highlight() {
    let mut v = view(&family());
    v.search("b");
    run_animation(&mut v);
    v.apply_user_transform(Gesture::Pan { dx: 40.0, dy: -12.0 });

    v.reset();
    assert!(v.highlight().is_empty());
    run_animation(&mut v);
    assert_eq!(v.transform(), ViewportTransform::IDENTITY);
}

#[test]
fn user_gesture_interrupts_centering() {
    let mut v = view(&family());
    let start = v.transform();
    v.search("b");
    v.apply_user_transform(Gesture::Pan { dx: 10.0, dy: 20.0 });
    assert!(!v.viewport().is_animating());
    assert_eq!(
        v.transform(),
        ViewportTransform::new(start.x + 10.0, start.y + 20.0, start.k)
    );
    run_animation(&mut v);
    assert_eq!(
        v.transform(),
        ViewportTransform::new(start.x + 10.0, start.y + 20.0, start.k)
    );
    // Highlight survives the gesture.
    assert!(!v.highlight().is_empty());
}
