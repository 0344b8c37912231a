//! Given steps for task REST API scenarios.

use super::world::TaskApiWorld;
use rstest_bdd_macros::given;

#[given("an empty task board")]
fn empty_task_board(world: &mut TaskApiWorld) {
    *world = TaskApiWorld::new();
}
