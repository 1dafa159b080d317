use sqlx::SqlitePool;

use super::{deleted, ensure_same_id};
use crate::db;
use crate::error::{CoreError, EntityKind, Outcome, Rejection};
use crate::models::{Client, ClientPayload, DeleteConfirmation};
use crate::validation::validate_client;

pub async fn list(pool: &SqlitePool) -> Result<Vec<Client>, sqlx::Error> {
    let mut conn = pool.acquire().await?;
    db::clients::list(&mut conn).await
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Outcome<Client>, sqlx::Error> {
    let mut conn = pool.acquire().await?;
    let client = db::clients::find_by_id(&mut conn, id).await?;
    Ok(match client {
        Some(client) => Outcome::Accepted(client),
        None => Outcome::Rejected(Rejection::NotFound(EntityKind::Client)),
    })
}

pub async fn create(
    pool: &SqlitePool,
    payload: &ClientPayload,
) -> Result<Outcome<Client>, sqlx::Error> {
    Outcome::settle(try_create(pool, payload).await)
}

async fn try_create(pool: &SqlitePool, payload: &ClientPayload) -> Result<Client, CoreError> {
    let mut tx = pool.begin().await?;

    validate_client(&mut tx, payload, None).await?;
    let client = db::clients::insert(&mut tx, payload).await?;

    tx.commit().await?;
    tracing::info!(client_id = client.id, "Created client");
    Ok(client)
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    payload: &ClientPayload,
) -> Result<Outcome<Client>, sqlx::Error> {
    Outcome::settle(try_update(pool, id, payload).await)
}

async fn try_update(
    pool: &SqlitePool,
    id: i64,
    payload: &ClientPayload,
) -> Result<Client, CoreError> {
    ensure_same_id(EntityKind::Client, id, payload.id)?;

    let mut tx = pool.begin().await?;

    let mut client = db::clients::find_by_id(&mut tx, id)
        .await?
        .ok_or(Rejection::NotFound(EntityKind::Client))?;

    validate_client(&mut tx, payload, Some(id)).await?;

    client.given_name = payload.given_name.clone();
    client.family_name = payload.family_name.clone();
    client.national_id = payload.national_id.clone();
    client.age = payload.age;
    db::clients::update(&mut tx, &client).await?;

    tx.commit().await?;
    tracing::info!(client_id = client.id, "Updated client");
    Ok(client)
}

pub async fn delete(
    pool: &SqlitePool,
    id: i64,
) -> Result<Outcome<DeleteConfirmation>, sqlx::Error> {
    Outcome::settle(try_delete(pool, id).await)
}

async fn try_delete(pool: &SqlitePool, id: i64) -> Result<DeleteConfirmation, CoreError> {
    let mut tx = pool.begin().await?;

    if db::clients::find_by_id(&mut tx, id).await?.is_none() {
        return Err(Rejection::NotFound(EntityKind::Client).into());
    }
    if db::reservations::any_for_client(&mut tx, id).await? {
        return Err(Rejection::ClientHasReservations.into());
    }

    db::clients::delete(&mut tx, id).await?;

    tx.commit().await?;
    tracing::info!(client_id = id, "Deleted client");
    Ok(deleted(EntityKind::Client, id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::{client_payload, seed_reservation, setup_test_db};

    #[tokio::test]
    async fn test_create_returns_generated_id() {
        let pool = setup_test_db().await;

        let client = create(&pool, &client_payload("1710034065"))
            .await
            .unwrap()
            .accepted()
            .unwrap();

        assert_eq!(client.id, 1);
        assert_eq!(client.given_name, "Ana");
        assert_eq!(list(&pool).await.unwrap(), vec![client]);
    }

    #[tokio::test]
    async fn test_create_duplicate_national_id_rejected() {
        let pool = setup_test_db().await;

        let first = create(&pool, &client_payload("1710034065")).await.unwrap();
        assert!(first.is_accepted());

        let second = create(&pool, &client_payload("1710034065")).await.unwrap();
        assert_eq!(second.rejection(), Some(&Rejection::DuplicateNationalId));
        assert_eq!(list(&pool).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_age_boundaries() {
        let pool = setup_test_db().await;

        let ids = ["1710034065", "0102030400", "1712345675", "0912345675"];
        for ((age, ok), national_id) in [(17, false), (18, true), (70, true), (71, false)]
            .into_iter()
            .zip(ids)
        {
            let mut payload = client_payload(national_id);
            payload.age = Some(age);
            let outcome = create(&pool, &payload).await.unwrap();
            assert_eq!(outcome.is_accepted(), ok, "age {age}");
        }
    }

    #[tokio::test]
    async fn test_update_id_mismatch_rejected_without_writing() {
        let pool = setup_test_db().await;
        create(&pool, &client_payload("1710034065")).await.unwrap();

        let mut payload = client_payload("1710034065");
        payload.id = 6;
        payload.given_name = "Beatriz".to_string();

        let outcome = update(&pool, 5, &payload).await.unwrap();
        assert_eq!(
            outcome.rejection(),
            Some(&Rejection::IdMismatch(EntityKind::Client))
        );

        let stored = get(&pool, 1).await.unwrap().accepted().unwrap();
        assert_eq!(stored.given_name, "Ana");
    }

    #[tokio::test]
    async fn test_update_missing_client() {
        let pool = setup_test_db().await;

        let mut payload = client_payload("1710034065");
        payload.id = 3;
        let outcome = update(&pool, 3, &payload).await.unwrap();
        assert_eq!(
            outcome.rejection(),
            Some(&Rejection::NotFound(EntityKind::Client))
        );
    }

    #[tokio::test]
    async fn test_update_keeps_own_national_id_and_copies_fields() {
        let pool = setup_test_db().await;
        let client = create(&pool, &client_payload("1710034065"))
            .await
            .unwrap()
            .accepted()
            .unwrap();

        let mut payload = client_payload("1710034065");
        payload.id = client.id;
        payload.family_name = "Vega".to_string();
        payload.age = Some(45);

        let updated = update(&pool, client.id, &payload)
            .await
            .unwrap()
            .accepted()
            .unwrap();
        assert_eq!(updated.id, client.id);
        assert_eq!(updated.family_name, "Vega");
        assert_eq!(updated.age, Some(45));
    }

    #[tokio::test]
    async fn test_update_to_taken_national_id_rejected() {
        let pool = setup_test_db().await;
        create(&pool, &client_payload("1710034065")).await.unwrap();
        let other = create(&pool, &client_payload("0102030400"))
            .await
            .unwrap()
            .accepted()
            .unwrap();

        let mut payload = client_payload("1710034065");
        payload.id = other.id;
        let outcome = update(&pool, other.id, &payload).await.unwrap();
        assert_eq!(outcome.rejection(), Some(&Rejection::DuplicateNationalId));
    }

    #[tokio::test]
    async fn test_delete_client_with_reservation_rejected() {
        let pool = setup_test_db().await;
        let reservation = {
            let mut conn = pool.acquire().await.unwrap();
            seed_reservation(&mut conn).await
        };

        let outcome = delete(&pool, reservation.client_id).await.unwrap();
        assert_eq!(outcome.rejection(), Some(&Rejection::ClientHasReservations));
        assert!(get(&pool, reservation.client_id).await.unwrap().is_accepted());
    }

    #[tokio::test]
    async fn test_delete_client_without_reservations() {
        let pool = setup_test_db().await;
        let client = create(&pool, &client_payload("1710034065"))
            .await
            .unwrap()
            .accepted()
            .unwrap();

        let confirmation = delete(&pool, client.id).await.unwrap().accepted().unwrap();
        assert_eq!(confirmation.id, client.id);
        assert_eq!(confirmation.message, "client with ID 1 was deleted");

        assert_eq!(
            get(&pool, client.id).await.unwrap().rejection(),
            Some(&Rejection::NotFound(EntityKind::Client))
        );
    }

    #[tokio::test]
    async fn test_delete_missing_client() {
        let pool = setup_test_db().await;
        let outcome = delete(&pool, 9).await.unwrap();
        assert_eq!(
            outcome.rejection(),
            Some(&Rejection::NotFound(EntityKind::Client))
        );
    }
}
