//! Integration tests for anchored layout running through the full stage
//! tick: dirty propagation, parent chains, presets, scale and screen
//! re-flows.
//!
//! # Usage
//!
//! ```sh
//! cargo test --test layout_integration
//! ```

use bevy_ecs::prelude::*;
use glam::Vec2;

use uimotion::components::anchor::Anchor;
use uimotion::components::scale::Scale;
use uimotion::components::screenposition::ScreenPosition;
use uimotion::components::toucharea::TouchArea;
use uimotion::resources::stageconfig::StageConfig;
use uimotion::stage::{ElementDef, UiStage};

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn assert_pos(stage: &UiStage, entity: Entity, x: f32, y: f32) {
    let pos = stage.world().get::<ScreenPosition>(entity).unwrap().pos;
    assert!(
        approx_eq(pos.x, x) && approx_eq(pos.y, y),
        "expected ({x}, {y}), got ({}, {})",
        pos.x,
        pos.y
    );
}

/// Stage with the default 1280x720 screen; elements are standalone
/// textures so no atlas is involved.
fn stage() -> UiStage {
    let _ = env_logger::builder().is_test(true).try_init();
    UiStage::new(StageConfig::new())
}

fn spawn(stage: &mut UiStage, w: f32, h: f32) -> Entity {
    stage
        .create_element(ElementDef::new("ui.png").with_size(w, h))
        .unwrap()
}

// =============================================================================
// Anchoring against the screen
// =============================================================================

#[test]
fn default_anchor_lands_on_origin() {
    let mut stage = stage();
    let e = spawn(&mut stage, 32.0, 32.0);
    stage.tick(0.0);
    assert_pos(&stage, e, 0.0, 0.0);

    let rect = stage.world().get::<TouchArea>(e).unwrap().rect;
    assert!(approx_eq(rect.w, 32.0) && approx_eq(rect.h, 32.0));
}

#[test]
fn centered_element_resolves_against_screen() {
    let mut stage = stage();
    let e = spawn(&mut stage, 32.0, 32.0);
    stage
        .world_mut()
        .get_mut::<Anchor>(e)
        .unwrap()
        .position_from_center(0.0, 0.0);
    stage.tick(0.0);
    // Element center on screen center: top-left at (640-16, 360-16).
    assert_pos(&stage, e, 624.0, 344.0);
}

#[test]
fn bottom_right_percentages_grow_inward() {
    let mut stage = stage();
    let e = spawn(&mut stage, 32.0, 32.0);
    stage
        .world_mut()
        .get_mut::<Anchor>(e)
        .unwrap()
        .position_from_bottom_right(0.1, 0.1);
    stage.tick(0.0);
    // Bottom-right corner 10% in from the screen's: (1280-128-32, 720-72-32).
    assert_pos(&stage, e, 1120.0, 616.0);
}

#[test]
fn pixel_offset_from_top_right() {
    let mut stage = stage();
    let e = spawn(&mut stage, 32.0, 32.0);
    {
        let mut anchor = stage.world_mut().get_mut::<Anchor>(e).unwrap();
        anchor.position_from_top_right(0.0, 0.0);
        anchor.set_pixel_offset(Vec2::new(40.0, 20.0));
    }
    stage.tick(0.0);
    // Right edge 40px in from the screen's right, top 20px down.
    assert_pos(&stage, e, 1208.0, 20.0);
}

// =============================================================================
// Parent chains
// =============================================================================

#[test]
fn three_level_chain_resolves_in_one_tick() {
    let mut stage = stage();
    let panel = spawn(&mut stage, 96.0, 48.0);
    let coin = spawn(&mut stage, 32.0, 32.0);
    let dot = spawn(&mut stage, 32.0, 32.0);

    stage
        .world_mut()
        .get_mut::<Anchor>(panel)
        .unwrap()
        .position_from_top_left(0.25, 0.25);
    stage
        .world_mut()
        .get_mut::<Anchor>(coin)
        .unwrap()
        .position_from_center(0.0, 0.0);
    stage.set_parent(coin, Some(panel)).unwrap();
    stage.set_parent(dot, Some(coin)).unwrap();

    stage.tick(0.0);

    assert_pos(&stage, panel, 320.0, 180.0);
    // Coin centered inside the panel's 96x48 rect.
    assert_pos(&stage, coin, 352.0, 188.0);
    // Dot hangs from the coin's top-left with no offset.
    assert_pos(&stage, dot, 352.0, 188.0);
}

#[test]
fn child_offset_is_a_fraction_of_the_parent() {
    let mut stage = stage();
    let panel = spawn(&mut stage, 200.0, 100.0);
    let child = spawn(&mut stage, 10.0, 10.0);
    stage.set_parent(child, Some(panel)).unwrap();
    stage
        .world_mut()
        .get_mut::<Anchor>(child)
        .unwrap()
        .position_from_top_left(0.5, 0.5);

    stage.tick(0.0);
    // Half of 200x100, not half of the screen.
    assert_pos(&stage, child, 100.0, 50.0);
}

#[test]
fn reparenting_moves_the_child_next_tick() {
    let mut stage = stage();
    let panel = spawn(&mut stage, 200.0, 100.0);
    let child = spawn(&mut stage, 10.0, 10.0);
    stage
        .world_mut()
        .get_mut::<Anchor>(child)
        .unwrap()
        .position_from_top_left(0.5, 0.5);
    stage.tick(0.0);
    assert_pos(&stage, child, 640.0, 360.0);

    stage.set_parent(child, Some(panel)).unwrap();
    stage.tick(0.0);
    assert_pos(&stage, child, 100.0, 50.0);
}

#[test]
fn despawned_parent_falls_back_to_screen() {
    let mut stage = stage();
    let panel = spawn(&mut stage, 200.0, 100.0);
    let child = spawn(&mut stage, 32.0, 32.0);
    stage.set_parent(child, Some(panel)).unwrap();
    stage
        .world_mut()
        .get_mut::<Anchor>(child)
        .unwrap()
        .position_from_center(0.0, 0.0);
    stage.tick(0.0);

    stage.despawn(panel).unwrap();
    stage.world_mut().get_mut::<Anchor>(child).unwrap().dirty = true;
    stage.tick(0.0);
    // Centered against the screen now.
    assert_pos(&stage, child, 624.0, 344.0);
}

// =============================================================================
// Re-flow triggers
// =============================================================================

#[test]
fn scale_change_reflows_next_tick() {
    let mut stage = stage();
    let e = spawn(&mut stage, 32.0, 32.0);
    stage
        .world_mut()
        .get_mut::<Anchor>(e)
        .unwrap()
        .position_from_center(0.0, 0.0);
    stage.tick(0.0);
    assert_pos(&stage, e, 624.0, 344.0);

    *stage.world_mut().get_mut::<Scale>(e).unwrap() = Scale::uniform(2.0);
    stage.tick(0.0);
    // Effective size doubled to 64x64, still centered.
    assert_pos(&stage, e, 608.0, 328.0);
    let rect = stage.world().get::<TouchArea>(e).unwrap().rect;
    assert!(approx_eq(rect.w, 64.0) && approx_eq(rect.h, 64.0));
}

#[test]
fn screen_resize_reflows_everything() {
    let mut stage = stage();
    let centered = spawn(&mut stage, 32.0, 32.0);
    let corner = spawn(&mut stage, 32.0, 32.0);
    stage
        .world_mut()
        .get_mut::<Anchor>(centered)
        .unwrap()
        .position_from_center(0.0, 0.0);
    stage
        .world_mut()
        .get_mut::<Anchor>(corner)
        .unwrap()
        .position_from_bottom_right(0.0, 0.0);
    stage.tick(0.0);

    stage.set_screen_size(640, 360);
    stage.tick(0.0);
    assert_pos(&stage, centered, 304.0, 164.0);
    assert_pos(&stage, corner, 608.0, 328.0);
}

#[test]
fn clean_tree_is_left_alone() {
    let mut stage = stage();
    let e = spawn(&mut stage, 32.0, 32.0);
    stage.tick(0.0);

    // Poke the resolved position directly; with no dirty anchors the
    // resolver must not recompute it.
    stage
        .world_mut()
        .get_mut::<ScreenPosition>(e)
        .unwrap()
        .set_pos(Vec2::new(77.0, 88.0));
    stage.tick(0.0);
    assert_pos(&stage, e, 77.0, 88.0);
}
