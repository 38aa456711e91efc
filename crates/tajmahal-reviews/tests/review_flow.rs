//! End-to-end review flow: seed, submit, summarize.

use std::thread;

use tajmahal_reviews::prelude::*;

fn me() -> Reviewer {
    Reviewer::new("Manon Garcia", Some("profile_picture".to_string()))
}

#[test]
fn submissions_come_back_last_first() {
    let store = ReviewStore::from_source(&FakeReviewSource);
    let seed = store.all();

    let comments = ["premier", "deuxième", "troisième", "quatrième"];
    for (i, comment) in comments.iter().enumerate() {
        store.submit(me().compose(comment, (i % 5) as i32 + 1)).unwrap();
    }

    let all = store.all();
    assert_eq!(all.len(), seed.len() + comments.len());

    let newest: Vec<&str> = all[..comments.len()]
        .iter()
        .map(|r| r.comment.as_deref().unwrap())
        .collect();
    assert_eq!(newest, vec!["quatrième", "troisième", "deuxième", "premier"]);
    assert_eq!(&all[comments.len()..], &seed[..]);
}

#[test]
fn rejected_submissions_leave_stats_alone() {
    let store = ReviewStore::from_source(&FakeReviewSource);
    let before = store.stats();

    assert_eq!(
        store.submit(me().compose("   ", 4)),
        Err(RejectionReason::EmptyComment)
    );
    assert_eq!(
        store.submit(me().compose("Très bon", 0)),
        Err(RejectionReason::InvalidRating)
    );

    assert_eq!(store.stats(), before);
}

#[test]
fn stats_track_the_session() {
    let store = ReviewStore::empty();
    for rate in 1..=5 {
        store.submit(me().compose("avis", rate)).unwrap();
    }

    let stats = RatingAggregator::compute(&store.all());
    assert_eq!(stats.average, 3.0);
    assert_eq!(stats.total_reviews, 5);
    assert_eq!(stats.percentages, [20, 20, 20, 20, 20]);
    assert_eq!(stats, store.stats());
}

#[test]
fn untrusted_seed_is_counted_but_not_bucketed() {
    let seed = vec![
        Review::new("Ghost", None, None, 0),
        Review::new("Loud", None, Some("!!!".to_string()), 7),
    ];
    let store = ReviewStore::new(seed);
    store.submit(me().compose("Correct", 5)).unwrap();

    let stats = store.stats();
    assert_eq!(stats.total_reviews, 3);
    assert_eq!(stats.average, 4.0);
    assert_eq!(stats.bucketed(), 1);
    assert_eq!(stats.percentages, [0, 0, 0, 0, 33]);
}

#[test]
fn concurrent_submissions_are_not_lost() {
    let store = ReviewStore::from_source(&FakeReviewSource);
    let seed_len = store.len();
    let threads = 8;
    let per_thread = 25;

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let store = store.clone();
            thread::spawn(move || {
                let reviewer = Reviewer::new(format!("user-{}", t), None);
                for i in 0..per_thread {
                    store
                        .submit(reviewer.compose(&format!("avis {}", i), (i % 5) + 1))
                        .unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let all = store.all();
    assert_eq!(all.len(), seed_len + (threads * per_thread) as usize);

    // Each thread's own reviews stay in reverse submission order.
    for t in 0..threads {
        let name = format!("user-{}", t);
        let mine: Vec<String> = all
            .iter()
            .filter(|r| r.username == name)
            .map(|r| r.comment.clone().unwrap())
            .collect();
        let expected: Vec<String> = (0..per_thread).rev().map(|i| format!("avis {}", i)).collect();
        assert_eq!(mine, expected);
    }
}
