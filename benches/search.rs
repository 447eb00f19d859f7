use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::{Rng, distributions::Alphanumeric};
use std::hint::black_box;

use contact_book::prelude::{
    Contact, ContactStore, MemoryStorage, NoSeed, STORAGE_KEY, search,
};

fn random_word(rng: &mut impl Rng, len: usize) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

fn make_contacts(n: usize) -> Vec<Contact> {
    let mut rng = rand::thread_rng();
    (1..=n as u64)
        .map(|id| {
            Contact::new(
                id,
                format!("{} {}", random_word(&mut rng, 6), random_word(&mut rng, 8)),
                format!("{}@{}.com", random_word(&mut rng, 8), random_word(&mut rng, 5)),
                format!(
                    "{:03}-{:03}-{:04}",
                    rng.gen_range(0..1000),
                    rng.gen_range(0..1000),
                    rng.gen_range(0..10_000)
                ),
            )
        })
        .collect()
}

// Store backed by memory so only CPU work and serialization are measured
fn make_store(contacts: &[Contact]) -> ContactStore {
    let blob = serde_json::to_string(contacts).expect("serialize contacts");
    let storage = MemoryStorage::with_entry(STORAGE_KEY, &blob);
    let mut store = ContactStore::new(Box::new(storage), Box::new(NoSeed));
    store.initialize().expect("load snapshot");
    store
}

fn bench_search(c: &mut Criterion) {
    let contacts = make_contacts(5_000);

    c.bench_function("search 5k contacts (short term)", |b| {
        b.iter(|| black_box(search(&contacts, black_box("ab"))));
    });

    c.bench_function("search 5k contacts (empty term)", |b| {
        b.iter(|| black_box(search(&contacts, black_box(""))));
    });
}

fn bench_mutations(c: &mut Criterion) {
    let contacts = make_contacts(5_000);

    c.bench_function("create + persist into 5k contacts", |b| {
        b.iter_batched(
            || make_store(&contacts),
            |mut store| {
                store.begin_create();
                store.update_draft_field("name", "Zoe").expect("field");
                black_box(store.commit_draft().expect("commit"));
            },
            BatchSize::SmallInput,
        );
    });

    c.bench_function("delete + persist from 5k contacts", |b| {
        b.iter_batched(
            || make_store(&contacts),
            |mut store| black_box(store.delete_contact(2_500).expect("delete")),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_search, bench_mutations);
criterion_main!(benches);
