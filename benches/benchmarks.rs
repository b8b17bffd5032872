criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        classifying_every_three_card_hand,
        computing_perfect_pairs_single_deck,
        computing_perfect_pairs_eight_decks,
        computing_twentyone_single_deck,
        computing_twentyone_depleted_shoe,
        computing_perfect_pairs_eor,
        computing_twentyone_eor,
        assembling_side_report,
}

fn depleted() -> Shoe {
    let mut shoe = Shoe::standard(6);
    Card::all().step_by(3).for_each(|card| {
        shoe.remove(card);
        shoe.remove(card);
    });
    shoe
}

fn classifying_every_three_card_hand(c: &mut criterion::Criterion) {
    c.bench_function("classify every ordered 3-card draw", |b| {
        b.iter(|| {
            Card::all()
                .flat_map(|x| Card::all().map(move |y| (x, y)))
                .flat_map(|(x, y)| Card::all().map(move |z| [x, y, z]))
                .map(Category::from)
                .filter(|category| *category != Category::Lose)
                .count()
        })
    });
}

fn computing_perfect_pairs_single_deck(c: &mut criterion::Criterion) {
    let shoe = Shoe::standard(1);
    c.bench_function("compute Perfect Pairs on 1 deck", |b| {
        b.iter(|| PerfectPairs::compute(&shoe))
    });
}

fn computing_perfect_pairs_eight_decks(c: &mut criterion::Criterion) {
    let shoe = Shoe::standard(8);
    c.bench_function("compute Perfect Pairs on 8 decks", |b| {
        b.iter(|| PerfectPairs::compute(&shoe))
    });
}

fn computing_twentyone_single_deck(c: &mut criterion::Criterion) {
    let shoe = Shoe::standard(1);
    c.bench_function("compute 21+3 on 1 deck", |b| {
        b.iter(|| TwentyOnePlusThree::compute(&shoe))
    });
}

fn computing_twentyone_depleted_shoe(c: &mut criterion::Criterion) {
    let shoe = depleted();
    c.bench_function("compute 21+3 on a depleted 6-deck shoe", |b| {
        b.iter(|| TwentyOnePlusThree::compute(&shoe))
    });
}

fn computing_perfect_pairs_eor(c: &mut criterion::Criterion) {
    let shoe = depleted();
    c.bench_function("compute Perfect Pairs effect of removal", |b| {
        b.iter(|| Eor::of::<PerfectPairs>(&shoe))
    });
}

fn computing_twentyone_eor(c: &mut criterion::Criterion) {
    let shoe = depleted();
    c.bench_function("compute 21+3 effect of removal", |b| {
        b.iter(|| Eor::of::<TwentyOnePlusThree>(&shoe))
    });
}

fn assembling_side_report(c: &mut criterion::Criterion) {
    let shoe = depleted();
    c.bench_function("assemble the SIDE report", |b| {
        b.iter(|| Report::from(&shoe).lines())
    });
}

use sidebets::cards::Card;
use sidebets::cards::Shoe;
use sidebets::evaluation::Category;
use sidebets::sidebets::Eor;
use sidebets::sidebets::PerfectPairs;
use sidebets::sidebets::Report;
use sidebets::sidebets::SideBet;
use sidebets::sidebets::TwentyOnePlusThree;
