use std::cell::RefCell;

use super::row::RowParts;

#[derive(Default)]
struct RowPool {
    parts: RowParts,
}

impl RowPool {
    fn take(&mut self) -> RowParts {
        std::mem::take(&mut self.parts)
    }

    fn put(&mut self, parts: RowParts) {
        self.parts = parts;
    }
}

thread_local! {
    static ROW_POOL: RefCell<RowPool> = RefCell::new(RowPool::default());
}

pub(crate) fn take_row_parts() -> RowParts {
    ROW_POOL.with(|pool| pool.borrow_mut().take())
}

pub(crate) fn put_row_parts(parts: RowParts) {
    ROW_POOL.with(|pool| pool.borrow_mut().put(parts));
}
