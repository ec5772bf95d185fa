use crate::domain::model::{Job, OverflowPolicy};

pub trait ConfigProvider {
    fn overflow_policy(&self) -> OverflowPolicy;
    fn continue_on_error(&self) -> bool;
    fn jobs(&self) -> &[Job];
}
