//! End-to-end tests for scanning-session event dispatch

use meshscan_core::{Anchor, AnchorId, AnchorKind, MeshBuffer, Point3f, Transform3D, Vector3f};
use meshscan_session::{MeshVisualizer, ScanSession, SessionEvent, NORMALS_NODE_NAME};

fn patch_buffer(width: usize) -> MeshBuffer {
    let vertices: Vec<Point3f> = (0..width)
        .map(|i| Point3f::new(i as f32 * 0.1, 0.0, 0.0))
        .collect();
    let normals = vec![Vector3f::new(0.0, 1.0, 0.0); width];
    MeshBuffer::from_parts(vertices, normals, vec![[0, 2, 1]])
}

fn mesh_anchor(width: usize) -> Anchor {
    Anchor::mesh(AnchorId::new(), Transform3D::identity(), patch_buffer(width))
}

#[test]
fn added_anchor_appears_in_scene_with_normals_overlay() {
    let mut session = ScanSession::with_seed(7);
    let anchor = mesh_anchor(3);

    session.handle_event(SessionEvent::AnchorAdded(anchor.clone()));

    assert_eq!(session.scene().len(), 1);
    let node = session
        .scene()
        .node(&MeshVisualizer::node_name(anchor.id))
        .unwrap();
    assert!(node.geometry.is_some());
    assert!(node.child(NORMALS_NODE_NAME).is_some());
}

#[test]
fn update_replaces_geometry_but_keeps_color() {
    let mut session = ScanSession::with_seed(7);
    let anchor = mesh_anchor(3);
    session.handle_event(SessionEvent::AnchorAdded(anchor.clone()));
    let original_color = session.colorizer().color_for(anchor.id).unwrap();

    let mut grown = mesh_anchor(6);
    grown.id = anchor.id;
    session.handle_event(SessionEvent::AnchorUpdated(grown));

    let node = session
        .scene()
        .node(&MeshVisualizer::node_name(anchor.id))
        .unwrap();
    let geometry = node.geometry.as_ref().unwrap();
    assert_eq!(geometry.vertex_count(), 6);
    assert_eq!(geometry.material.diffuse, original_color);
    assert_eq!(session.scene().len(), 1);
    assert_eq!(session.colorizer().len(), 1);
}

#[test]
fn update_for_unseen_anchor_falls_back_to_add() {
    let mut session = ScanSession::with_seed(7);
    let anchor = mesh_anchor(3);

    session.handle_event(SessionEvent::AnchorUpdated(anchor.clone()));

    assert_eq!(session.scene().len(), 1);
    assert!(session.colorizer().color_for(anchor.id).is_some());
}

#[test]
fn removed_anchor_leaves_the_scene() {
    let mut session = ScanSession::with_seed(7);
    let anchor = mesh_anchor(3);
    session.handle_event(SessionEvent::AnchorAdded(anchor.clone()));

    session.handle_event(SessionEvent::AnchorRemoved(anchor.id));

    assert!(session.scene().is_empty());
    // The color stays assigned in case the anchor comes back
    assert!(session.colorizer().color_for(anchor.id).is_some());
}

#[test]
fn non_mesh_anchors_are_silently_ignored() {
    let mut session = ScanSession::with_seed(7);
    let plane = Anchor::new(AnchorId::new(), Transform3D::identity(), AnchorKind::Plane);

    session.handle_event(SessionEvent::AnchorAdded(plane.clone()));
    session.handle_event(SessionEvent::AnchorUpdated(plane));

    assert!(session.scene().is_empty());
    assert!(session.colorizer().is_empty());
}

#[test]
fn frame_and_fault_events_mutate_nothing() {
    let mut session = ScanSession::with_seed(7);
    let anchor = mesh_anchor(3);
    session.handle_event(SessionEvent::AnchorAdded(anchor.clone()));

    session.handle_event(SessionEvent::Frame {
        anchors: vec![anchor],
    });
    session.handle_event(SessionEvent::Failed {
        reason: "sensor unavailable".to_string(),
    });
    session.handle_event(SessionEvent::Interrupted);
    session.handle_event(SessionEvent::InterruptionEnded);

    assert_eq!(session.scene().len(), 1);
    assert_eq!(session.colorizer().len(), 1);
}

#[test]
fn colors_stay_stable_across_many_interleaved_updates() {
    let mut session = ScanSession::with_seed(7);
    let anchors: Vec<Anchor> = (0..10).map(|_| mesh_anchor(3)).collect();

    for anchor in &anchors {
        session.handle_event(SessionEvent::AnchorAdded(anchor.clone()));
    }
    let assigned: Vec<_> = anchors
        .iter()
        .map(|a| session.colorizer().color_for(a.id).unwrap())
        .collect();

    for round in 0..5 {
        for anchor in anchors.iter().rev() {
            let mut updated = anchor.clone();
            updated.transform = Transform3D::translation(Vector3f::new(round as f32, 0.0, 0.0));
            session.handle_event(SessionEvent::AnchorUpdated(updated));
        }
    }

    for (anchor, original) in anchors.iter().zip(&assigned) {
        assert_eq!(session.colorizer().color_for(anchor.id), Some(*original));
        let node = session
            .scene()
            .node(&MeshVisualizer::node_name(anchor.id))
            .unwrap();
        assert_eq!(node.geometry.as_ref().unwrap().material.diffuse, *original);
    }
    assert_eq!(session.scene().len(), 10);
}
