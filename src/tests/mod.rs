mod balance_tests;
mod chat_tests;
mod user_tests;

use crate::service::DivvyService;
use crate::storage::in_memory::InMemoryStorage;

pub fn create_test_service() -> DivvyService<InMemoryStorage> {
    DivvyService::new(InMemoryStorage::new())
}
