use sqlx::SqlitePool;

use super::{deleted, ensure_same_id};
use crate::db;
use crate::error::{CoreError, EntityKind, Outcome, Rejection};
use crate::models::{AdditionalServiceDetail, DeleteConfirmation, ServicePayload};
use crate::validation::validate_service;

pub async fn list(pool: &SqlitePool) -> Result<Vec<AdditionalServiceDetail>, sqlx::Error> {
    let mut conn = pool.acquire().await?;
    db::services::list_detail(&mut conn).await
}

pub async fn get(
    pool: &SqlitePool,
    id: i64,
) -> Result<Outcome<AdditionalServiceDetail>, sqlx::Error> {
    let mut conn = pool.acquire().await?;
    let service = db::services::find_detail(&mut conn, id).await?;
    Ok(match service {
        Some(service) => Outcome::Accepted(service),
        None => Outcome::Rejected(Rejection::NotFound(EntityKind::AdditionalService)),
    })
}

pub async fn create(
    pool: &SqlitePool,
    payload: &ServicePayload,
) -> Result<Outcome<AdditionalServiceDetail>, sqlx::Error> {
    Outcome::settle(try_create(pool, payload).await)
}

async fn try_create(
    pool: &SqlitePool,
    payload: &ServicePayload,
) -> Result<AdditionalServiceDetail, CoreError> {
    let mut tx = pool.begin().await?;

    let validated = validate_service(&mut tx, payload).await?;
    let service = db::services::insert(&mut tx, &validated).await?;

    tx.commit().await?;
    tracing::info!(
        service_id = service.id,
        reservation_id = service.reservation_id,
        "Created additional service"
    );
    Ok(AdditionalServiceDetail {
        id: service.id,
        description: service.description,
        cost: service.cost,
        reservation: validated.reservation,
    })
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    payload: &ServicePayload,
) -> Result<Outcome<AdditionalServiceDetail>, sqlx::Error> {
    Outcome::settle(try_update(pool, id, payload).await)
}

async fn try_update(
    pool: &SqlitePool,
    id: i64,
    payload: &ServicePayload,
) -> Result<AdditionalServiceDetail, CoreError> {
    ensure_same_id(EntityKind::AdditionalService, id, payload.id)?;

    let mut tx = pool.begin().await?;

    let mut service = db::services::find_by_id(&mut tx, id)
        .await?
        .ok_or(Rejection::NotFound(EntityKind::AdditionalService))?;

    // The description check does not skip this service: keeping the current
    // description is rejected as a duplicate.
    let validated = validate_service(&mut tx, payload).await?;

    service.description = validated.description;
    service.cost = validated.cost;
    service.reservation_id = validated.reservation.id;
    db::services::update(&mut tx, &service).await?;

    tx.commit().await?;
    tracing::info!(service_id = id, "Updated additional service");
    Ok(AdditionalServiceDetail {
        id: service.id,
        description: service.description,
        cost: service.cost,
        reservation: validated.reservation,
    })
}

pub async fn delete(
    pool: &SqlitePool,
    id: i64,
) -> Result<Outcome<DeleteConfirmation>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    if !db::services::delete(&mut tx, id).await? {
        return Ok(Outcome::Rejected(Rejection::NotFound(
            EntityKind::AdditionalService,
        )));
    }

    tx.commit().await?;
    tracing::info!(service_id = id, "Deleted additional service");
    Ok(Outcome::Accepted(deleted(EntityKind::AdditionalService, id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::{seed_reservation, setup_test_db};
    use crate::models::EntityRef;

    fn payload(description: &str, cost: f64, reservation_id: i64) -> ServicePayload {
        ServicePayload {
            id: 0,
            description: description.to_string(),
            cost,
            reservation: EntityRef { id: reservation_id },
        }
    }

    async fn seed(pool: &SqlitePool) -> i64 {
        let mut conn = pool.acquire().await.unwrap();
        seed_reservation(&mut conn).await.id
    }

    #[tokio::test]
    async fn test_cost_boundaries() {
        let pool = setup_test_db().await;
        let reservation_id = seed(&pool).await;

        for (description, cost, ok) in [
            ("Zero", 0.0, false),
            ("Cent", 0.01, true),
            ("Max", 200.0, true),
            ("Over", 200.01, false),
        ] {
            let outcome = create(&pool, &payload(description, cost, reservation_id))
                .await
                .unwrap();
            assert_eq!(outcome.is_accepted(), ok, "cost {cost}");
            if !ok {
                assert_eq!(
                    outcome.rejection(),
                    Some(&Rejection::ServiceCostOutOfRange)
                );
            }
        }
    }

    #[tokio::test]
    async fn test_create_attaches_full_reservation() {
        let pool = setup_test_db().await;
        let reservation_id = seed(&pool).await;

        let created = create(&pool, &payload("Laundry", 20.0, reservation_id))
            .await
            .unwrap()
            .accepted()
            .unwrap();

        assert_eq!(created.reservation.id, reservation_id);
        assert_eq!(created.reservation.client.family_name, "Torres");
        assert_eq!(
            get(&pool, created.id).await.unwrap(),
            Outcome::Accepted(created)
        );
    }

    #[tokio::test]
    async fn test_create_for_missing_reservation_rejected() {
        let pool = setup_test_db().await;

        let outcome = create(&pool, &payload("Laundry", 20.0, 404))
            .await
            .unwrap();
        let rejection = outcome.rejection().unwrap();
        assert_eq!(rejection, &Rejection::NotFound(EntityKind::Reservation));
        assert_eq!(rejection.to_string(), "reservation does not exist");
        assert!(list(&pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_duplicate_description_rejected() {
        let pool = setup_test_db().await;
        let reservation_id = seed(&pool).await;

        create(&pool, &payload("Laundry", 20.0, reservation_id))
            .await
            .unwrap();
        let outcome = create(&pool, &payload("Laundry", 30.0, reservation_id))
            .await
            .unwrap();
        assert_eq!(outcome.rejection(), Some(&Rejection::DuplicateDescription));
    }

    #[tokio::test]
    async fn test_update_with_unchanged_description_is_rejected() {
        // Description uniqueness ignores the record being updated, so a
        // service cannot be re-saved under its own description.
        let pool = setup_test_db().await;
        let reservation_id = seed(&pool).await;
        let created = create(&pool, &payload("Laundry", 20.0, reservation_id))
            .await
            .unwrap()
            .accepted()
            .unwrap();

        let mut same = payload("Laundry", 25.0, reservation_id);
        same.id = created.id;
        let outcome = update(&pool, created.id, &same).await.unwrap();
        assert_eq!(outcome.rejection(), Some(&Rejection::DuplicateDescription));
    }

    #[tokio::test]
    async fn test_update_with_new_description() {
        let pool = setup_test_db().await;
        let reservation_id = seed(&pool).await;
        let created = create(&pool, &payload("Laundry", 20.0, reservation_id))
            .await
            .unwrap()
            .accepted()
            .unwrap();

        let mut changed = payload("Express laundry", 35.0, reservation_id);
        changed.id = created.id;
        let updated = update(&pool, created.id, &changed)
            .await
            .unwrap()
            .accepted()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.description, "Express laundry");
        assert_eq!(updated.cost, 35.0);
    }

    #[tokio::test]
    async fn test_update_mismatch_and_missing() {
        let pool = setup_test_db().await;
        let reservation_id = seed(&pool).await;

        let mut p = payload("Laundry", 20.0, reservation_id);
        p.id = 2;
        assert_eq!(
            update(&pool, 1, &p).await.unwrap().rejection(),
            Some(&Rejection::IdMismatch(EntityKind::AdditionalService))
        );
        assert_eq!(
            update(&pool, 2, &p).await.unwrap().rejection(),
            Some(&Rejection::NotFound(EntityKind::AdditionalService))
        );
    }

    #[tokio::test]
    async fn test_delete() {
        let pool = setup_test_db().await;
        let reservation_id = seed(&pool).await;
        let created = create(&pool, &payload("Laundry", 20.0, reservation_id))
            .await
            .unwrap()
            .accepted()
            .unwrap();

        let confirmation = delete(&pool, created.id)
            .await
            .unwrap()
            .accepted()
            .unwrap();
        assert_eq!(
            confirmation.message,
            "additional service with ID 1 was deleted"
        );
        assert_eq!(
            delete(&pool, created.id).await.unwrap().rejection(),
            Some(&Rejection::NotFound(EntityKind::AdditionalService))
        );
    }
}
