use criterion::{black_box, criterion_group, criterion_main, Criterion};
use term_arcade::core::{parse_pattern, LifeGrid, LifeState, PongState};
use term_arcade::term::{LifeView, Viewport};
use term_arcade::types::PongAction;

const R_PENTOMINO: &[u8] = b"\n\n\n\n\n\n\n\n\n\n\n                                       **\n                                      **\n                                       *\n";

fn bench_life_step(c: &mut Criterion) {
    let grid = parse_pattern(R_PENTOMINO);
    let mut next = LifeGrid::new();

    c.bench_function("life_step_25x80", |b| {
        b.iter(|| {
            black_box(&grid).step_into(&mut next);
        })
    });
}

fn bench_life_advance(c: &mut Criterion) {
    let mut state = LifeState::new(parse_pattern(R_PENTOMINO));

    c.bench_function("life_advance", |b| {
        b.iter(|| {
            state.advance();
        })
    });
}

fn bench_life_render(c: &mut Criterion) {
    let state = LifeState::new(parse_pattern(R_PENTOMINO));
    let view = LifeView::default();
    let (w, h) = LifeView::frame_size();
    let mut fb = term_arcade::term::FrameBuffer::new(w, h);

    c.bench_function("life_render", |b| {
        b.iter(|| {
            view.render_into(black_box(&state), Viewport::new(w, h), &mut fb);
        })
    });
}

fn bench_pong_tick(c: &mut Criterion) {
    let mut state = PongState::new();

    c.bench_function("pong_update_and_advance", |b| {
        b.iter(|| {
            black_box(state.update());
            state.apply_action(PongAction::Advance);
        })
    });
}

criterion_group!(
    benches,
    bench_life_step,
    bench_life_advance,
    bench_life_render,
    bench_pong_tick
);
criterion_main!(benches);
