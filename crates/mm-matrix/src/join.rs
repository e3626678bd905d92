//! Completion barrier for scoped worker threads.

use std::any::Any;
use std::thread::ScopedJoinHandle;

use crate::error::{MatrixError, Result};

/// Block until every handle has finished.
///
/// All handles are joined even after one reports a panic, so no worker is
/// still running when this returns. The first panic, in spawn order, becomes
/// a `TaskFailure` carrying the task index and the panic message.
pub fn join_all(handles: Vec<ScopedJoinHandle<'_, ()>>) -> Result<()> {
    let mut failure = None;
    for (task, handle) in handles.into_iter().enumerate() {
        if let Err(payload) = handle.join() {
            if failure.is_none() {
                failure = Some(MatrixError::TaskFailure {
                    task,
                    message: panic_message(payload.as_ref()),
                });
            }
        }
    }
    match failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "internal panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    #[test]
    fn test_join_all_ok() {
        let done = AtomicUsize::new(0);
        let result = thread::scope(|s| {
            let handles = (0..8)
                .map(|_| {
                    s.spawn(|| {
                        done.fetch_add(1, Ordering::SeqCst);
                    })
                })
                .collect();
            join_all(handles)
        });
        assert!(result.is_ok());
        assert_eq!(done.load(Ordering::SeqCst), 8);
    }

    #[test]
    fn test_join_all_waits_for_every_task_after_failure() {
        let done = AtomicUsize::new(0);
        let result = thread::scope(|s| {
            let handles = (0..6)
                .map(|i| {
                    let done = &done;
                    s.spawn(move || {
                        if i == 2 {
                            panic!("task {} exploded", i);
                        }
                        thread::sleep(std::time::Duration::from_millis(5));
                        done.fetch_add(1, Ordering::SeqCst);
                    })
                })
                .collect();
            join_all(handles)
        });

        match result {
            Err(MatrixError::TaskFailure { task, message }) => {
                assert_eq!(task, 2);
                assert_eq!(message, "task 2 exploded");
            }
            other => panic!("expected TaskFailure, got {:?}", other),
        }
        assert_eq!(done.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn test_panic_message_variants() {
        let s: Box<dyn Any + Send> = Box::new("static");
        assert_eq!(panic_message(s.as_ref()), "static");
        let s: Box<dyn Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(s.as_ref()), "owned");
        let s: Box<dyn Any + Send> = Box::new(42u8);
        assert_eq!(panic_message(s.as_ref()), "internal panic");
    }
}
