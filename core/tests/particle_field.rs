use folio_core::field::{
    glow_stops, link_alpha, node_count, node_color, CONNECTION_DISTANCE, MAX_NODES, NODE_PALETTE,
    NODE_RADIUS_MAX, NODE_RADIUS_MIN, NODE_SPEED,
};
use folio_core::{FieldOpacity, FieldSurface, Link, Node, ParticleField, Rgb, Theme};

#[derive(Default)]
struct RecordingSurface {
    clears: Vec<(f64, f64)>,
    links: Vec<Link>,
    nodes: Vec<(Node, Rgb, f64)>,
}

impl FieldSurface for RecordingSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.clears.push((width, height));
    }

    fn draw_link(&mut self, link: &Link) {
        self.links.push(*link);
    }

    fn draw_node(&mut self, node: &Node, color: Rgb, opacity: f64) {
        self.nodes.push((*node, color, opacity));
    }
}

fn field_with(width: f64, height: f64, nodes: Vec<Node>) -> ParticleField {
    let mut field = ParticleField::new(1);
    field.resize(width, height);
    let slots = field.nodes_mut();
    assert!(slots.len() >= nodes.len(), "field too small for fixture");
    for (slot, node) in slots.iter_mut().zip(nodes) {
        *slot = node;
    }
    field
}

fn still(x: f64, y: f64) -> Node {
    Node {
        x,
        y,
        vx: 0.0,
        vy: 0.0,
        radius: 2.0,
    }
}

#[test]
fn node_count_follows_density_and_cap() {
    assert_eq!(node_count(700.0), 20);
    assert_eq!(node_count(3000.0), MAX_NODES);
    assert_eq!(node_count(34.0), 0);
    assert_eq!(node_count(0.0), 0);
    assert_eq!(node_count(-10.0), 0);
    assert_eq!(node_count(f64::NAN), 0);
}

#[test]
fn resize_generates_nodes_inside_sampling_ranges() {
    let mut field = ParticleField::new(42);
    field.resize(700.0, 500.0);
    assert_eq!(field.nodes().len(), 20);
    for node in field.nodes() {
        assert!((0.0..=700.0).contains(&node.x));
        assert!((0.0..=500.0).contains(&node.y));
        assert!(node.vx.abs() <= NODE_SPEED);
        assert!(node.vy.abs() <= NODE_SPEED);
        assert!((NODE_RADIUS_MIN..=NODE_RADIUS_MAX).contains(&node.radius));
    }

    field.resize(3000.0, 900.0);
    assert_eq!(field.nodes().len(), 50);
}

#[test]
fn resize_discards_previous_nodes() {
    let mut field = ParticleField::new(9);
    field.resize(700.0, 500.0);
    let before = field.nodes().to_vec();
    field.resize(700.0, 500.0);
    assert_eq!(field.nodes().len(), before.len());
    assert_ne!(field.nodes(), before.as_slice());
}

#[test]
fn nodes_stay_inside_viewport_across_frames() {
    let mut field = ParticleField::new(0xC0FFEE);
    field.resize(140.0, 60.0);
    let mut surface = RecordingSurface::default();
    for _ in 0..5000 {
        field.tick(&mut surface, FieldOpacity::for_theme(Theme::Dark));
        for node in field.nodes() {
            assert!((0.0..=140.0).contains(&node.x), "x escaped: {}", node.x);
            assert!((0.0..=60.0).contains(&node.y), "y escaped: {}", node.y);
        }
    }
}

#[test]
fn crossing_an_edge_flips_velocity_and_clamps() {
    let mut node = Node {
        x: 99.9,
        y: 0.05,
        vx: 0.15,
        vy: -0.1,
        radius: 1.0,
    };
    node.advance(100.0, 50.0);
    assert_eq!(node.x, 100.0);
    assert_eq!(node.y, 0.0);
    assert_eq!(node.vx, -0.15);
    assert_eq!(node.vy, 0.1);

    node.advance(100.0, 50.0);
    assert!(node.x < 100.0);
    assert!(node.y > 0.0);
    assert_eq!(node.vx, -0.15);
}

#[test]
fn links_connect_only_close_pairs() {
    let field = field_with(
        105.0,
        400.0,
        vec![still(0.0, 0.0), still(90.0, 0.0), still(600.0, 300.0)],
    );
    let links = field.links();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].from, (0.0, 0.0));
    assert_eq!(links[0].to, (90.0, 0.0));
    assert!((links[0].alpha - 0.5).abs() < 1e-9);
}

#[test]
fn link_alpha_fades_to_zero_at_threshold() {
    assert_eq!(link_alpha(0.0), Some(1.0));
    assert_eq!(link_alpha(CONNECTION_DISTANCE), None);
    let near = link_alpha(CONNECTION_DISTANCE - 1.0).unwrap();
    assert!(near > 0.0 && near < 0.01);
}

#[test]
fn tick_scales_alpha_by_theme_and_cycles_palette() {
    let mut field = field_with(70.0, 70.0, vec![still(10.0, 10.0), still(40.0, 50.0)]);
    let mut surface = RecordingSurface::default();
    field.tick(&mut surface, FieldOpacity::for_theme(Theme::Light));

    assert_eq!(surface.clears, vec![(70.0, 70.0)]);
    assert_eq!(surface.links.len(), 1);
    let expected = (1.0 - 50.0 / CONNECTION_DISTANCE) * 0.15;
    assert!((surface.links[0].alpha - expected).abs() < 1e-9);

    assert_eq!(surface.nodes.len(), 2);
    assert_eq!(surface.nodes[0].1, NODE_PALETTE[0]);
    assert_eq!(surface.nodes[1].1, NODE_PALETTE[1]);
    assert!(surface.nodes.iter().all(|(_, _, opacity)| *opacity == 0.4));
}

#[test]
fn tick_links_use_positions_before_the_step() {
    let moving = Node {
        vx: 1.0,
        vy: 0.5,
        ..still(10.0, 10.0)
    };
    let mut field = field_with(70.0, 70.0, vec![moving, still(40.0, 50.0)]);
    let mut surface = RecordingSurface::default();
    field.tick(&mut surface, FieldOpacity::for_theme(Theme::Dark));

    assert_eq!(surface.links[0].from, (10.0, 10.0));
    assert_eq!((surface.nodes[0].0.x, surface.nodes[0].0.y), (11.0, 10.5));
    assert_eq!(surface.nodes[0].0, field.nodes()[0]);
}

#[test]
fn step_moves_every_node_without_drawing() {
    let mut field = field_with(70.0, 70.0, vec![Node { vx: -2.0, ..still(1.0, 30.0) }]);
    field.step();
    assert_eq!(field.nodes()[0].x, 0.0);
    assert_eq!(field.nodes()[0].vx, 2.0);
}

#[test]
fn theme_opacity_levels() {
    assert_eq!(
        FieldOpacity::for_theme(Theme::Dark),
        FieldOpacity { line: 0.4, node: 1.0 }
    );
    assert_eq!(
        FieldOpacity::for_theme(Theme::Light),
        FieldOpacity { line: 0.15, node: 0.4 }
    );
}

#[test]
fn palette_wraps_every_three_nodes() {
    assert_eq!(node_color(0), node_color(3));
    assert_eq!(node_color(2).hex(), "#ec4899");
}

#[test]
fn glow_stops_encode_alpha_as_hex() {
    let stops = glow_stops(NODE_PALETTE[0], 1.0);
    assert_eq!(stops[0], (0.0, "#06b6d4cc".to_string()));
    assert_eq!(stops[1], (0.5, "#06b6d44d".to_string()));
    assert_eq!(stops[2], (1.0, "#06b6d400".to_string()));

    let dim = glow_stops(NODE_PALETTE[1], 0.4);
    assert_eq!(dim[0].1, "#8b5cf652");
    assert_eq!(dim[1].1, "#8b5cf61f");
}

#[test]
fn rgba_formatting() {
    assert_eq!(Rgb::new(6, 182, 212).rgba(0.25), "rgba(6, 182, 212, 0.25)");
}
