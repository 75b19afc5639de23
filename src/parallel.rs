//! Parallel iteration with rayon.

use crate::pipeline::fruit_len;
use rayon::prelude::*;

/// Calls `visitor` once per item on the rayon pool. Visit order is
/// unspecified. Stops early once a visit fails and returns that error.
pub fn visit_parallel<T, E, F>(items: &[T], visitor: F) -> Result<(), E>
where
    T: Sync,
    E: Send,
    F: Fn(&T) -> Result<(), E> + Sync + Send,
{
    items.par_iter().try_for_each(visitor)
}

/// Same sum as `pipeline::total_length`, folded per worker then combined.
pub fn parallel_total_length<S: AsRef<str> + Sync>(items: &[S]) -> usize {
    items
        .par_iter()
        .map(|f| fruit_len(f.as_ref()))
        .reduce(|| 0, |a, b| a + b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_FRUITS;
    use crate::pipeline::total_length;
    use proptest::prelude::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[test]
    fn test_visits_every_item_once() {
        let seen = Mutex::new(Vec::new());
        let result: Result<(), ()> = visit_parallel(&DEFAULT_FRUITS, |f| {
            seen.lock().unwrap().push(f.to_string());
            Ok(())
        });
        assert!(result.is_ok());

        let seen = seen.into_inner().unwrap();
        assert_eq!(seen.len(), DEFAULT_FRUITS.len());

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for f in &seen {
            *counts.entry(f.as_str()).or_insert(0) += 1;
        }
        assert_eq!(counts["Kiwi"], 2);
        assert_eq!(counts["Apple"], 2);
        assert_eq!(counts["Banana"], 1);
    }

    #[test]
    fn test_empty_input_never_calls_visitor() {
        let calls = AtomicUsize::new(0);
        let result: Result<(), ()> = visit_parallel::<&str, _, _>(&[], |_| {
            calls.fetch_add(1, Ordering::Relaxed);
            Ok(())
        });
        assert!(result.is_ok());
        assert_eq!(calls.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_error_is_returned() {
        let result = visit_parallel(&DEFAULT_FRUITS, |f| {
            if *f == "Mango" {
                Err(format!("rejected {f}"))
            } else {
                Ok(())
            }
        });
        assert_eq!(result, Err("rejected Mango".to_string()));
    }

    #[test]
    fn test_parallel_total_length() {
        assert_eq!(parallel_total_length(&DEFAULT_FRUITS), 41);
        assert_eq!(parallel_total_length::<&str>(&[]), 0);
    }

    proptest! {
        #[test]
        fn test_parallel_sum_matches_sequential(
            items in prop::collection::vec("[a-z]{0,12}", 0..200)
        ) {
            prop_assert_eq!(parallel_total_length(&items), total_length(&items));
        }
    }
}
