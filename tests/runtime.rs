//! Integration tests for runtime primitives.

mod runtime {
    mod test_async_task;
}
