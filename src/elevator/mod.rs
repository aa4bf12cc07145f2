pub mod dispatcher;
pub mod dispatcher_tests;
pub mod step_engine;

pub use dispatcher::select_elevator;
pub use step_engine::advance;
