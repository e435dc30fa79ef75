//! Rollout and rules-engine benchmarks.
//!
//! Run with: `cargo bench`
//!
//! These benchmarks measure:
//! - A full random game from the first draft pick
//! - State cloning mid-battle
//! - MCTS search with varying rollout counts, from the draft and the battle

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use rust_locm::agents::{Agent, RandomAgent};
use rust_locm::core::{GameConfig, GameState, Phase, PlayerPair};
use rust_locm::mcts::{GameNode, MCTSConfig, MCTSSearch, PlayoutAgents};

fn playout_agents() -> PlayoutAgents<GameState> {
    PlayerPair::from_parts(Box::new(RandomAgent::new(1)), Box::new(RandomAgent::new(2)))
}

/// A state right after the draft, reached by random picks.
fn battle_start(seed: u64) -> GameState {
    let mut state = GameState::new(GameConfig::default(), seed).unwrap();
    let mut agent = RandomAgent::new(seed);
    while state.phase == Phase::Draft {
        let action = agent.act(&state);
        state.act(&action).unwrap();
    }
    state
}

// =============================================================================
// Rules Engine Benchmarks
// =============================================================================

fn bench_random_game(c: &mut Criterion) {
    c.bench_function("random_game", |b| {
        let mut agent = RandomAgent::new(7);
        b.iter_batched(
            || GameState::new(GameConfig::default(), 42).unwrap(),
            |mut state| {
                while !state.is_terminal() {
                    let action = agent.act(&state);
                    state.act(&action).unwrap();
                }
                black_box(state.winner)
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_clone(c: &mut Criterion) {
    let state = battle_start(3);
    c.bench_function("clone_battle_state", |b| b.iter(|| black_box(state.clone())));
}

// =============================================================================
// MCTS Search Benchmarks
// =============================================================================

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("mcts_rollouts");
    group.sample_size(10);

    let draft = GameNode::new(GameState::new(GameConfig::default(), 42).unwrap());
    let battle = GameNode::new(battle_start(42));

    for rollouts in [50u32, 200] {
        group.throughput(Throughput::Elements(u64::from(rollouts)));
        for (name, root) in [("draft", &draft), ("battle", &battle)] {
            group.bench_with_input(BenchmarkId::new(name, rollouts), &rollouts, |b, &rollouts| {
                b.iter(|| {
                    let mut search = MCTSSearch::new(MCTSConfig::default(), playout_agents()).unwrap();
                    search.run(root, rollouts).unwrap();
                    black_box(search.choose(root).unwrap())
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_random_game, bench_clone, bench_search);
criterion_main!(benches);
