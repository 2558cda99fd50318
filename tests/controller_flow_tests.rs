use approx::assert_relative_eq;
use card_hand::{
    CardHandle, HandAnchor, HandCommand, HandController, HandHost, HandIntent, HandOptions,
    HandState, HeadlessScene, PointerState, Pose, SceneryRect,
};
use glam::{Quat, Vec2, Vec3};

/// Großer Zeitschritt: Rotationen erreichen ihr Ziel in einem Tick.
const SETTLE_DT: f32 = 1.0;

struct Fixture {
    controller: HandController,
    state: HandState,
    scene: HeadlessScene,
}

impl Fixture {
    fn new() -> Self {
        let options = HandOptions::default();
        let scene = HeadlessScene::new(Vec2::new(800.0, 600.0), options.card_size);
        Self {
            controller: HandController::new(),
            state: HandState::new(HandAnchor::default(), options),
            scene,
        }
    }

    fn with_cards(count: usize) -> Self {
        let mut fixture = Self::new();
        for _ in 0..count {
            fixture.tick(PointerState {
                draw_pressed: true,
                ..PointerState::default()
            });
        }
        // Zwei Ticks ohne Eingabe: Drehung einschwingen, dann Anhebung entlang der neuen Hochachse
        fixture.tick(PointerState::default());
        fixture.tick(PointerState::default());
        fixture
    }

    fn tick(&mut self, pointer: PointerState) {
        self.controller
            .tick(&mut self.state, &mut self.scene, SETTLE_DT, &pointer)
            .expect("Tick sollte ohne Fehler durchlaufen");
    }

    fn handle_at(&self, slot: usize) -> CardHandle {
        self.state
            .hand
            .get(slot)
            .expect("Slot sollte existieren")
            .handle()
    }

    /// Bildschirmposition der Kartenmitte von `slot`.
    fn screen_of(&self, slot: usize) -> Vec2 {
        let pose = self
            .scene
            .card_pose(self.handle_at(slot))
            .expect("Karte sollte im Host existieren");
        self.scene.world_to_screen(pose.position)
    }

    /// Selektiert `slot` und beginnt den Drag im selben Tick.
    fn grab(&mut self, slot: usize) {
        let screen_pos = self.screen_of(slot);
        self.tick(PointerState {
            primary_down: true,
            ..PointerState::at(screen_pos)
        });
    }

    fn drag_to(&mut self, screen_pos: Vec2) {
        self.tick(PointerState {
            primary_down: true,
            ..PointerState::at(screen_pos)
        });
    }

    fn release_at(&mut self, screen_pos: Vec2) {
        self.tick(PointerState {
            primary_released: true,
            ..PointerState::at(screen_pos)
        });
    }
}

#[test]
fn test_drawing_three_cards_assigns_contiguous_slots() {
    let fixture = Fixture::with_cards(3);

    assert_eq!(fixture.state.hand.slot_indices(), vec![0, 1, 2]);
    assert_eq!(fixture.scene.card_count(), 3);
    assert!(fixture.state.interaction.selected.is_none());
    assert!(fixture.state.interaction.dragged.is_none());
}

#[test]
fn test_drawn_cards_fan_out_along_curve() {
    let fixture = Fixture::with_cards(3);

    let positions: Vec<Vec3> = fixture
        .state
        .hand
        .handles()
        .into_iter()
        .map(|handle| fixture.scene.card_pose(handle).expect("Pose erwartet").position)
        .collect();

    // Kurve läuft von +x nach -x, die mittlere Karte steht aufrecht über dem Anker
    assert!(positions[0].x > positions[1].x);
    assert!(positions[1].x > positions[2].x);
    assert_relative_eq!(positions[1].x, 0.0, epsilon = 1e-4);
    assert_relative_eq!(
        positions[1].y,
        -0.35 + HandOptions::default().card_lift,
        epsilon = 1e-4
    );
    // Spätere Slots liegen weiter hinten
    assert!(positions[0].z < positions[1].z);
    assert!(positions[1].z < positions[2].z);
}

#[test]
fn test_drag_out_of_hand_plays_card_and_reindexes() {
    let mut fixture = Fixture::with_cards(3);
    let played = fixture.handle_at(1);
    let last = fixture.handle_at(2);

    fixture.grab(1);
    assert_eq!(fixture.state.interaction.selected, Some(1));
    assert_eq!(fixture.state.interaction.dragged, Some(1));

    let above_hand = Vec2::new(400.0, 30.0);
    fixture.drag_to(above_hand);
    assert!(fixture.state.hand.get(1).expect("Slot 1").in_drag());

    fixture.release_at(above_hand);

    assert_eq!(fixture.state.hand.len(), 2);
    assert_eq!(fixture.state.hand.slot_indices(), vec![0, 1]);
    assert_eq!(fixture.state.hand.index_of(last), Some(1));
    assert_eq!(fixture.state.hand.index_of(played), None);
    assert_eq!(fixture.scene.destroyed(), &[played]);
    assert!(fixture.state.interaction.selected.is_none());
    assert!(fixture.state.interaction.dragged.is_none());
}

#[test]
fn test_release_over_other_card_keeps_card() {
    let mut fixture = Fixture::with_cards(3);

    fixture.grab(1);
    // Ein weiterer Tick, damit die Nachbarn ihre aufgefächerte Pose einnehmen
    let grab_pos = fixture.screen_of(1);
    fixture.drag_to(grab_pos);

    let over_first = fixture.screen_of(0);
    fixture.drag_to(over_first);
    fixture.release_at(over_first);

    assert_eq!(fixture.state.hand.len(), 3);
    assert!(fixture.scene.destroyed().is_empty());
    assert!(fixture.state.interaction.dragged.is_none());
    assert_eq!(fixture.state.interaction.selected, Some(1));
}

#[test]
fn test_released_card_returns_to_its_slot() {
    let mut fixture = Fixture::with_cards(3);
    let before = fixture
        .scene
        .card_pose(fixture.handle_at(1))
        .expect("Pose erwartet");

    fixture.grab(1);
    let grab_pos = fixture.screen_of(1);
    fixture.drag_to(grab_pos);
    let over_first = fixture.screen_of(0);
    fixture.drag_to(over_first);
    fixture.release_at(over_first);
    fixture.tick(PointerState::default());

    let after = fixture
        .scene
        .card_pose(fixture.handle_at(1))
        .expect("Pose erwartet");
    assert!(!fixture.state.hand.get(1).expect("Slot 1").in_drag());
    assert_relative_eq!(after.position.x, before.position.x, epsilon = 1e-4);
    assert_relative_eq!(after.position.y, before.position.y, epsilon = 1e-4);
    // Weiterhin gehovert: vor allen anderen Karten
    assert!(after.position.z < 0.0);
}

#[test]
fn test_release_over_scenery_keeps_card() {
    let mut fixture = Fixture::with_cards(2);
    // Spielfeld-Zone hinter der gesamten Hand
    fixture.scene.add_scenery(SceneryRect {
        pose: Pose::new(Vec3::new(0.0, 0.0, 5.0), Quat::IDENTITY),
        size: Vec2::new(20.0, 20.0),
    });

    fixture.grab(0);
    let above_hand = Vec2::new(400.0, 30.0);
    fixture.drag_to(above_hand);
    fixture.release_at(above_hand);

    assert_eq!(fixture.state.hand.len(), 2);
    assert!(fixture.scene.destroyed().is_empty());
    assert!(fixture.state.interaction.dragged.is_none());
}

#[test]
fn test_play_key_while_dragging_plays_card() {
    let mut fixture = Fixture::with_cards(3);
    let played = fixture.handle_at(0);

    fixture.grab(0);
    fixture.tick(PointerState {
        play_pressed: true,
        primary_down: true,
        ..PointerState::at(fixture.screen_of(0))
    });

    assert_eq!(fixture.state.hand.len(), 2);
    assert_eq!(fixture.state.hand.slot_indices(), vec![0, 1]);
    assert_eq!(fixture.scene.destroyed(), &[played]);
    assert!(fixture.state.interaction.dragged.is_none());
}

#[test]
fn test_play_without_drag_is_noop() {
    let mut fixture = Fixture::with_cards(2);

    fixture
        .controller
        .handle_intent(
            &mut fixture.state,
            &mut fixture.scene,
            HandIntent::PlayCardRequested,
        )
        .expect("PlayCardRequested sollte ohne Fehler durchlaufen");

    assert_eq!(fixture.state.hand.len(), 2);
    assert!(fixture.scene.destroyed().is_empty());
    match fixture.state.command_log.entries().last() {
        Some(HandCommand::PlayCard) => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_tick_on_empty_hand_is_noop() {
    let mut fixture = Fixture::new();

    fixture.tick(PointerState {
        primary_down: true,
        primary_released: true,
        play_pressed: true,
        ..PointerState::at(Vec2::new(400.0, 300.0))
    });

    assert!(fixture.state.hand.is_empty());
    assert_eq!(fixture.scene.card_count(), 0);
    assert!(fixture.scene.destroyed().is_empty());
    assert!(fixture.state.interaction.selected.is_none());
}

#[test]
fn test_selection_is_frozen_while_dragging() {
    let mut fixture = Fixture::with_cards(3);

    fixture.grab(2);
    let over_first = fixture.screen_of(0);
    fixture.drag_to(over_first);
    fixture.drag_to(over_first);

    assert_eq!(fixture.state.interaction.selected, Some(2));
    assert_eq!(fixture.state.interaction.dragged, Some(2));
}

#[test]
fn test_hover_moves_selection_and_miss_keeps_it() {
    let mut fixture = Fixture::with_cards(3);

    fixture.tick(PointerState::at(fixture.screen_of(0)));
    assert_eq!(fixture.state.interaction.selected, Some(0));

    fixture.tick(PointerState::at(fixture.screen_of(2)));
    assert_eq!(fixture.state.interaction.selected, Some(2));
    assert!(fixture.state.interaction.dragged.is_none());

    fixture.tick(PointerState::at(Vec2::new(10.0, 10.0)));
    assert_eq!(fixture.state.interaction.selected, Some(2));
}

#[test]
fn test_pointer_outside_viewport_keeps_last_world_position() {
    let mut fixture = Fixture::with_cards(1);

    fixture.tick(PointerState::at(Vec2::new(400.0, 300.0)));
    let projected = fixture.state.interaction.pointer_world;
    assert!(projected.abs_diff_eq(Vec3::ZERO, 1e-4));

    fixture.tick(PointerState::default());
    assert_eq!(fixture.state.interaction.pointer_world, projected);
}

#[test]
fn test_anchor_moved_rebuilds_curve_and_layout() {
    let mut fixture = Fixture::with_cards(1);
    let anchor = HandAnchor::from_translation(Vec3::new(0.0, 1.0, 0.0));

    fixture
        .controller
        .handle_intent(
            &mut fixture.state,
            &mut fixture.scene,
            HandIntent::AnchorMoved { anchor },
        )
        .expect("AnchorMoved sollte ohne Fehler durchlaufen");
    assert_eq!(fixture.state.curve.b, Vec3::new(0.0, 1.0, 0.0));

    fixture.tick(PointerState::default());
    let pose = fixture
        .scene
        .card_pose(fixture.handle_at(0))
        .expect("Pose erwartet");
    let expected_y = 1.0 - 0.35 + fixture.state.options.card_lift;
    assert_relative_eq!(pose.position.y, expected_y, epsilon = 1e-4);
}

#[test]
fn test_options_changed_applies_new_curve_offsets() {
    let mut fixture = Fixture::with_cards(1);
    let options = HandOptions {
        curve_start: Vec3::new(3.0, -1.0, 0.0),
        curve_end: Vec3::new(-3.0, -1.0, 0.0),
        ..HandOptions::default()
    };

    fixture
        .controller
        .handle_intent(
            &mut fixture.state,
            &mut fixture.scene,
            HandIntent::OptionsChanged {
                options: Box::new(options),
            },
        )
        .expect("OptionsChanged sollte ohne Fehler durchlaufen");

    assert_eq!(fixture.state.curve.a, Vec3::new(3.0, -1.0, 0.0));
    assert_eq!(fixture.state.curve.c, Vec3::new(-3.0, -1.0, 0.0));
}

#[test]
fn test_options_changed_resizes_host_hitboxes() {
    let mut fixture = Fixture::with_cards(1);
    let card_pos = fixture.screen_of(0);
    // Knapp neben der Kartenmitte, außerhalb der Standard-Hitbox
    let beside = card_pos + Vec2::new(0.45 * fixture.scene.viewport_size.y / 5.0, 0.0);

    fixture.tick(PointerState::at(beside));
    assert!(fixture.state.interaction.selected.is_none());

    let options = HandOptions {
        card_size: Vec2::new(1.2, 1.6),
        ..HandOptions::default()
    };
    fixture
        .controller
        .handle_intent(
            &mut fixture.state,
            &mut fixture.scene,
            HandIntent::OptionsChanged {
                options: Box::new(options),
            },
        )
        .expect("OptionsChanged sollte ohne Fehler durchlaufen");
    assert_eq!(fixture.scene.card_size, Vec2::new(1.2, 1.6));

    fixture.tick(PointerState::at(beside));
    assert_eq!(fixture.state.interaction.selected, Some(0));
}

#[test]
fn test_invalid_options_are_rejected_and_state_kept() {
    let mut fixture = Fixture::with_cards(1);
    let options = HandOptions {
        card_size: Vec2::ZERO,
        curve_start: Vec3::new(5.0, 0.0, 0.0),
        ..HandOptions::default()
    };

    let result = fixture.controller.handle_intent(
        &mut fixture.state,
        &mut fixture.scene,
        HandIntent::OptionsChanged {
            options: Box::new(options),
        },
    );

    assert!(result.is_err());
    assert_eq!(fixture.state.options, HandOptions::default());
    assert_eq!(fixture.state.curve.a, HandOptions::default().curve_start);
    assert_eq!(fixture.scene.card_size, HandOptions::default().card_size);
}

#[test]
fn test_command_log_records_draw_and_drag_sequence() {
    let mut fixture = Fixture::with_cards(2);
    fixture.grab(1);

    let structural: Vec<&HandCommand> = fixture
        .state
        .command_log
        .entries()
        .iter()
        .filter(|command| !matches!(command, HandCommand::SetPointerWorld { .. }))
        .collect();

    assert!(matches!(structural[0], HandCommand::DrawCard));
    assert!(matches!(structural[1], HandCommand::DrawCard));
    assert!(matches!(structural[2], HandCommand::SelectCard { index: 1 }));
    assert!(matches!(structural[3], HandCommand::BeginDrag { index: 1 }));
}
