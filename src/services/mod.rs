mod dispatch;

pub use dispatch::DispatchStore;
