//! Database-backed tests for the reward engine's persistence effects.
//!
//! Each test runs under `#[sqlx::test]`, which provisions an isolated
//! database and applies the workspace migrations (catalog seed included)
//! before handing over the pool. These cover the transactional guarantees
//! the HTTP-surface suite cannot: failed operations leave no partial
//! writes behind, and inventory rows disappear instead of lingering at
//! zero.

mod common;

use assert_matches::assert_matches;
use sqlx::PgPool;

use common::test_state;
use spriggly_api::engine::boosters::{self, UseBooster};
use spriggly_api::engine::daily;
use spriggly_api::engine::planting::{self, PlantSeed};
use spriggly_api::engine::shop::{self, ItemType, Purchase};
use spriggly_api::error::AppError;
use spriggly_core::error::CoreError;
use spriggly_db::models::user::{CreateUser, User};
use spriggly_db::repositories::{
    BoosterInventoryRepo, PlantRepo, SeedInventoryRepo, TemplateRepo, UserRepo,
};

// ============================================================================
// Helpers
// ============================================================================

async fn create_user(pool: &PgPool, name: &str) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            username: name.to_string(),
            email: format!("{name}@example.com"),
            // Never verified by these tests, any well-formed string will do.
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$dGVzdA$dGVzdA".to_string(),
        },
    )
    .await
    .expect("user creation should succeed")
}

// ============================================================================
// Shop
// ============================================================================

#[sqlx::test(migrations = "../db/migrations")]
async fn purchase_without_enough_coins_leaves_no_trace(pool: PgPool) {
    let state = test_state(pool.clone());
    let user = create_user(&pool, "pauper").await;
    assert_eq!(user.coins, 0);

    let booster = TemplateRepo::list_boosters(&pool)
        .await
        .unwrap()
        .into_iter()
        .next()
        .expect("catalog has boosters");
    assert!(booster.price > 0);

    let err = shop::purchase(
        &state,
        user.id,
        Purchase {
            item_type: ItemType::Booster,
            template_id: booster.id,
        },
    )
    .await
    .expect_err("purchase without funds must fail");
    assert_matches!(err, AppError::Core(CoreError::Validation(_)));

    // Nothing was debited and nothing was granted.
    let after = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(after.coins, 0);
    assert_eq!(after.total_coins_spent, 0);
    let stock = BoosterInventoryRepo::list_for_user(&pool, user.id)
        .await
        .unwrap();
    assert!(stock.is_empty());
}

// ============================================================================
// Planting
// ============================================================================

#[sqlx::test(migrations = "../db/migrations")]
async fn planting_the_last_seed_removes_the_inventory_row(pool: PgPool) {
    let state = test_state(pool.clone());
    let user = create_user(&pool, "gardener").await;

    let template = TemplateRepo::list_plants(&pool)
        .await
        .unwrap()
        .into_iter()
        .next()
        .expect("catalog has plants");

    let mut tx = pool.begin().await.unwrap();
    SeedInventoryRepo::add(&mut tx, user.id, template.id, 1)
        .await
        .unwrap();
    tx.commit().await.unwrap();

    let outcome = planting::plant_seed(
        &state,
        user.id,
        PlantSeed {
            plant_template_id: template.id,
        },
    )
    .await
    .expect("planting with a seed in stock should succeed");

    assert_eq!(outcome.plant.level, 1);
    assert_eq!(outcome.plant.xp, 0);

    // The row is gone, not sitting at quantity zero.
    assert!(outcome.seeds.is_empty());
    let stock = SeedInventoryRepo::list_for_user(&pool, user.id)
        .await
        .unwrap();
    assert!(stock.is_empty());
}

// ============================================================================
// Boosters
// ============================================================================

#[sqlx::test(migrations = "../db/migrations")]
async fn using_a_booster_decrements_stock_and_keeps_the_row(pool: PgPool) {
    let state = test_state(pool.clone());
    let user = create_user(&pool, "botanist").await;

    let plant_template = TemplateRepo::list_plants(&pool)
        .await
        .unwrap()
        .into_iter()
        .next()
        .expect("catalog has plants");
    let booster = TemplateRepo::list_boosters(&pool)
        .await
        .unwrap()
        .into_iter()
        .find(|b| b.effect == "add10Xp")
        .expect("catalog has a flat-XP booster");

    let mut tx = pool.begin().await.unwrap();
    let plant = PlantRepo::create(&mut tx, user.id, plant_template.id)
        .await
        .unwrap();
    BoosterInventoryRepo::add(&mut tx, user.id, booster.id, 3)
        .await
        .unwrap();
    tx.commit().await.unwrap();

    let outcome = boosters::use_booster(
        &state,
        user.id,
        plant.id,
        UseBooster {
            booster_template_id: booster.id,
        },
    )
    .await
    .expect("using a held booster should succeed");

    assert_eq!(outcome.plant.xp, 10);
    assert_eq!(outcome.boosters.len(), 1);
    assert_eq!(outcome.boosters[0].quantity, 2);
}

// ============================================================================
// Daily rewards
// ============================================================================

#[sqlx::test(migrations = "../db/migrations")]
async fn daily_reward_cannot_be_claimed_twice_in_one_day(pool: PgPool) {
    let state = test_state(pool.clone());
    let user = create_user(&pool, "regular").await;

    let first = daily::claim_daily_reward(&state, user.id)
        .await
        .expect("first claim of the day should succeed");
    assert_eq!(first.day, 1);

    let err = daily::claim_daily_reward(&state, user.id)
        .await
        .expect_err("second claim on the same day must fail");
    assert_matches!(err, AppError::Core(CoreError::Validation(_)));

    // The rejected claim changed nothing.
    let after = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(after.coins, first.coins);
    assert_eq!(after.daily_streak_day, 1);
    assert_eq!(after.claimed_days.len(), 1);
}
