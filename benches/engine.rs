use basket_eng::{Amount, Discount, Engine, Item, Quantity, Unit};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

const PRODUCTS: [(&str, f64); 5] = [
    ("Bread", 2.0),
    ("Butter", 1.8),
    ("Milk", 0.9),
    ("Eggs", 3.2),
    ("Apples", 1.1),
];

/// Generates baskets cycling through a small product range.
///
/// Every fifth line is a multi-unit line so grouping has to split lines.
pub struct BasketGenerator {
    lines: usize,
    produced: usize,
}

impl BasketGenerator {
    pub fn new(lines: usize) -> Self {
        Self { lines, produced: 0 }
    }
}

impl Iterator for BasketGenerator {
    type Item = Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.produced >= self.lines {
            return None;
        }

        let (name, price) = PRODUCTS[self.produced % PRODUCTS.len()];
        let units = if self.produced % 5 == 4 { 3 } else { 1 };
        self.produced += 1;

        Item::new(name, Quantity::whole(units), Unit::Each, Amount::from_float(price)).ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.lines - self.produced;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BasketGenerator {}

fn discounts() -> Vec<Discount> {
    vec![
        Discount::n_for_m("Bread", 2, 1).unwrap(),
        Discount::n_for_m("Eggs", 3, 2).unwrap(),
        Discount::fixed_price("Bread", Amount::from_float(0.9)).unwrap(),
        Discount::fixed_price("Butter", Amount::from_float(1.5)).unwrap(),
        Discount::fixed_price("Milk", Amount::from_float(0.75)).unwrap(),
        Discount::n_for_m("Apples", 5, 4).unwrap(),
    ]
}

fn bench_no_discounts(c: &mut Criterion) {
    let mut group = c.benchmark_group("no_discounts");
    let engine = Engine::default();

    for lines in [10usize, 100, 1_000] {
        let items: Vec<Item> = BasketGenerator::new(lines).collect();
        group.bench_with_input(BenchmarkId::from_parameter(lines), &items, |b, items| {
            b.iter(|| black_box(engine.price(items)));
        });
    }

    group.finish();
}

fn bench_mixed_discounts(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_discounts");
    let engine = Engine::new(discounts());

    for lines in [10usize, 100, 1_000] {
        let items: Vec<Item> = BasketGenerator::new(lines).collect();
        group.bench_with_input(BenchmarkId::from_parameter(lines), &items, |b, items| {
            b.iter(|| black_box(engine.price(items)));
        });
    }

    group.finish();
}

fn bench_same_product(c: &mut Criterion) {
    let mut group = c.benchmark_group("same_product");
    group.sample_size(10);

    let engine = Engine::new([
        Discount::n_for_m("Bread", 2, 1).unwrap(),
        Discount::fixed_price("Bread", Amount::from_float(0.9)).unwrap(),
    ]);
    let bread = Item::each("Bread", Amount::from_float(2.0)).unwrap();

    for count in [200usize, 10_000] {
        let items = vec![bread.clone(); count];
        group.bench_with_input(BenchmarkId::from_parameter(count), &items, |b, items| {
            b.iter(|| black_box(engine.checkout(&items.iter().cloned().collect())));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_no_discounts,
    bench_mixed_discounts,
    bench_same_product,
);

criterion_main!(benches);
