use card_hand::{
    HandAnchor, HandCommand, HandController, HandOptions, HandState, HeadlessScene, PointerState,
};
use card_hand_engine::app::layout::update_card_poses;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use std::hint::black_box;

const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);

fn build_hand(card_count: usize) -> (HandController, HandState, HeadlessScene) {
    let options = HandOptions::default();
    let mut scene = HeadlessScene::new(VIEWPORT, options.card_size);
    let mut state = HandState::new(HandAnchor::default(), options);
    let mut controller = HandController::new();

    for _ in 0..card_count {
        controller
            .handle_command(&mut state, &mut scene, HandCommand::DrawCard)
            .expect("DrawCard failed");
    }

    (controller, state, scene)
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");

    for &card_count in &[8usize, 64usize, 512usize] {
        let (_, mut state, mut scene) = build_hand(card_count);
        state.interaction.selected = Some(card_count / 2);

        group.bench_with_input(
            BenchmarkId::new("update_card_poses", card_count),
            &card_count,
            |b, _| {
                b.iter(|| {
                    update_card_poses(&mut state, &mut scene, black_box(0.016));
                    black_box(scene.card_count())
                })
            },
        );
    }

    group.finish();
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    for &card_count in &[8usize, 64usize] {
        let (mut controller, mut state, mut scene) = build_hand(card_count);
        // Zeiger über der Handmitte: jeder Tick projiziert, platziert und hit-testet
        let pointer = PointerState::at(VIEWPORT * Vec2::new(0.5, 0.55));

        group.bench_with_input(
            BenchmarkId::new("hover", card_count),
            &card_count,
            |b, _| {
                b.iter(|| {
                    controller
                        .tick(&mut state, &mut scene, black_box(0.016), &pointer)
                        .expect("Tick failed");
                    black_box(state.interaction.selected)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(layout_benches, bench_layout, bench_tick);
criterion_main!(layout_benches);
