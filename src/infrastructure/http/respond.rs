//! Response Protocol
//!
//! 所有路由 handler 共用的"校验后分支"响应模式：
//! 调用方先算出结果，再给出一个判定谓词和两个响应动作，
//! 本函数只负责选择其中一个动作执行。

/// 对 `is_correct` 求值一次：为真时执行 `on_correct`，否则执行 `on_incorrect`。
///
/// 两个动作恰好执行其一，本身不做 I/O，不持有状态，不会失败。
pub fn respond<R>(
    is_correct: impl FnOnce() -> bool,
    on_correct: impl FnOnce() -> R,
    on_incorrect: impl FnOnce() -> R,
) -> R {
    if is_correct() {
        on_correct()
    } else {
        on_incorrect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Calls {
        predicate: Cell<u32>,
        correct: Cell<u32>,
        incorrect: Cell<u32>,
    }

    impl Calls {
        fn new() -> Self {
            Self {
                predicate: Cell::new(0),
                correct: Cell::new(0),
                incorrect: Cell::new(0),
            }
        }
    }

    fn run(calls: &Calls, outcome: bool) -> &'static str {
        respond(
            || {
                calls.predicate.set(calls.predicate.get() + 1);
                outcome
            },
            || {
                calls.correct.set(calls.correct.get() + 1);
                "correct"
            },
            || {
                calls.incorrect.set(calls.incorrect.get() + 1);
                "incorrect"
            },
        )
    }

    #[test]
    fn test_true_runs_only_success_action() {
        let calls = Calls::new();

        assert_eq!(run(&calls, true), "correct");
        assert_eq!(calls.predicate.get(), 1);
        assert_eq!(calls.correct.get(), 1);
        assert_eq!(calls.incorrect.get(), 0);
    }

    #[test]
    fn test_false_runs_only_failure_action() {
        let calls = Calls::new();

        assert_eq!(run(&calls, false), "incorrect");
        assert_eq!(calls.predicate.get(), 1);
        assert_eq!(calls.correct.get(), 0);
        assert_eq!(calls.incorrect.get(), 1);
    }

    #[test]
    fn test_exactly_one_action_per_invocation() {
        let calls = Calls::new();

        for outcome in [true, false, true, true, false] {
            run(&calls, outcome);
        }

        assert_eq!(calls.predicate.get(), 5);
        assert_eq!(calls.correct.get() + calls.incorrect.get(), 5);
        assert_eq!(calls.correct.get(), 3);
    }
}
