mod common;

use chrono::Duration;

use cleany::models::{CleaningKind, CreateBooking, UpdateBooking};
use cleany::ServiceError;
use common::{at, booking, room, services};

#[actix_web::test]
async fn creating_a_booking_materializes_its_schedule() {
    let (services, _pool) = services().await;
    let room = room(&services).await;

    let created = booking(&services, room.id, at(2024, 5, 10, 15, 0), at(2024, 5, 14, 11, 0)).await;

    let orders = services.cleaning_orders.list().await.unwrap();
    assert_eq!(orders.len(), 4);
    assert!(orders.iter().all(|o| o.booking_id == created.id && !o.done));

    let schedule: Vec<_> = orders.iter().map(|o| (o.scheduled_at, o.kind, o.cost)).collect();
    assert_eq!(
        schedule,
        vec![
            (at(2024, 5, 10, 13, 0), CleaningKind::Periodic, 100),
            (at(2024, 5, 11, 13, 0), CleaningKind::Periodic, 100),
            (at(2024, 5, 12, 13, 0), CleaningKind::Periodic, 100),
            (at(2024, 5, 14, 12, 0), CleaningKind::General, 200),
        ]
    );
}

#[actix_web::test]
async fn one_night_stay_only_gets_a_turnover_clean() {
    let (services, _pool) = services().await;
    let room = room(&services).await;

    booking(&services, room.id, at(2024, 5, 10, 10, 0), at(2024, 5, 11, 11, 0)).await;

    let orders = services.cleaning_orders.list().await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].kind, CleaningKind::General);
    assert_eq!(orders[0].scheduled_at, at(2024, 5, 11, 12, 0));
    assert_eq!(orders[0].cost, 200);
}

#[actix_web::test]
async fn zero_length_stay_is_rejected_before_anything_is_written() {
    let (services, _pool) = services().await;
    let room = room(&services).await;
    let t = at(2024, 5, 10, 12, 0);

    let err = services
        .bookings
        .create(CreateBooking {
            room_id: room.id,
            check_in: t,
            check_out: t,
            guests: 1,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Validation(_)), "{err:?}");
    assert!(services.bookings.list().await.unwrap().is_empty());
    assert!(services.cleaning_orders.list().await.unwrap().is_empty());
}

#[actix_web::test]
async fn check_out_before_check_in_is_rejected() {
    let (services, _pool) = services().await;
    let room = room(&services).await;

    let err = services
        .bookings
        .create(CreateBooking {
            room_id: room.id,
            check_in: at(2024, 5, 12, 12, 0),
            check_out: at(2024, 5, 10, 12, 0),
            guests: 1,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Validation(_)));
}

#[actix_web::test]
async fn booking_needs_an_existing_room() {
    let (services, _pool) = services().await;

    let err = services
        .bookings
        .create(CreateBooking {
            room_id: 999,
            check_in: at(2024, 5, 10, 12, 0),
            check_out: at(2024, 5, 12, 12, 0),
            guests: 1,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
    assert!(err.to_string().starts_with("room not found"));
}

#[actix_web::test]
async fn missing_room_is_reported_before_bad_dates() {
    let (services, _pool) = services().await;
    let room = room(&services).await;
    let created = booking(&services, room.id, at(2024, 5, 1, 14, 0), at(2024, 5, 3, 10, 0)).await;
    let t = at(2024, 5, 10, 12, 0);

    let err = services
        .bookings
        .create(CreateBooking {
            room_id: 999,
            check_in: t,
            check_out: t,
            guests: 1,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)), "{err:?}");

    let err = services
        .bookings
        .update(
            created.id,
            UpdateBooking {
                room_id: 999,
                check_in: t,
                check_out: t,
                guests: 1,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)), "{err:?}");
    assert_eq!(services.bookings.list().await.unwrap(), vec![created]);
}

#[actix_web::test]
async fn guest_count_is_not_restricted() {
    let (services, _pool) = services().await;
    let room = room(&services).await;

    let created = services
        .bookings
        .create(CreateBooking {
            room_id: room.id,
            check_in: at(2024, 5, 10, 12, 0),
            check_out: at(2024, 5, 12, 12, 0),
            guests: 0,
        })
        .await
        .unwrap();

    assert_eq!(created.guests, 0);
    assert_eq!(services.cleaning_orders.list().await.unwrap().len(), 2);
}

#[actix_web::test]
async fn failed_schedule_insert_rolls_back_the_booking() {
    let (services, pool) = services().await;
    let room = room(&services).await;

    sqlx::query(
        "CREATE TRIGGER reject_orders BEFORE INSERT ON cleaning_orders \
         BEGIN SELECT RAISE(ABORT, 'orders disabled'); END",
    )
    .execute(&pool)
    .await
    .unwrap();

    let err = services
        .bookings
        .create(CreateBooking {
            room_id: room.id,
            check_in: at(2024, 5, 10, 12, 0),
            check_out: at(2024, 5, 13, 12, 0),
            guests: 2,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Internal(_)), "{err:?}");
    assert!(services.bookings.list().await.unwrap().is_empty());
}

#[actix_web::test]
async fn get_and_list_bookings() {
    let (services, _pool) = services().await;
    let room = room(&services).await;

    let first = booking(&services, room.id, at(2024, 6, 1, 14, 0), at(2024, 6, 3, 10, 0)).await;
    let second = booking(&services, room.id, at(2024, 6, 5, 14, 0), at(2024, 6, 6, 10, 0)).await;

    assert_eq!(services.bookings.get(first.id).await.unwrap(), first);
    assert_eq!(services.bookings.list().await.unwrap(), vec![first, second]);
    assert!(matches!(
        services.bookings.get(12345).await,
        Err(ServiceError::NotFound(_))
    ));
}

#[actix_web::test]
async fn updating_dates_keeps_the_old_schedule() {
    let (services, _pool) = services().await;
    let room = room(&services).await;
    let created = booking(&services, room.id, at(2024, 6, 1, 14, 0), at(2024, 6, 4, 10, 0)).await;
    let before = services.cleaning_orders.list().await.unwrap();

    let updated = services
        .bookings
        .update(
            created.id,
            UpdateBooking {
                room_id: room.id,
                check_in: at(2024, 6, 1, 14, 0),
                check_out: at(2024, 6, 10, 10, 0),
                guests: 3,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.check_out, at(2024, 6, 10, 10, 0));
    assert_eq!(updated.guests, 3);
    assert_eq!(services.bookings.get(created.id).await.unwrap(), updated);
    assert_eq!(services.cleaning_orders.list().await.unwrap(), before);
}

#[actix_web::test]
async fn update_revalidates_dates_room_and_existence() {
    let (services, _pool) = services().await;
    let room = room(&services).await;
    let created = booking(&services, room.id, at(2024, 6, 1, 14, 0), at(2024, 6, 4, 10, 0)).await;

    let request = |room_id, check_out| UpdateBooking {
        room_id,
        check_in: at(2024, 6, 1, 14, 0),
        check_out,
        guests: 2,
    };

    assert!(matches!(
        services
            .bookings
            .update(created.id, request(room.id, at(2024, 6, 1, 14, 0)))
            .await,
        Err(ServiceError::Validation(_))
    ));
    assert!(matches!(
        services
            .bookings
            .update(created.id, request(777, at(2024, 6, 4, 10, 0)))
            .await,
        Err(ServiceError::NotFound(_))
    ));
    assert!(matches!(
        services
            .bookings
            .update(4242, request(room.id, at(2024, 6, 4, 10, 0)))
            .await,
        Err(ServiceError::NotFound(_))
    ));
    assert_eq!(services.bookings.get(created.id).await.unwrap(), created);
}

#[actix_web::test]
async fn deleting_a_booking_leaves_its_orders() {
    let (services, _pool) = services().await;
    let room = room(&services).await;
    let created = booking(&services, room.id, at(2024, 6, 1, 14, 0), at(2024, 6, 3, 10, 0)).await;

    services.bookings.delete(created.id).await.unwrap();

    assert!(matches!(
        services.bookings.get(created.id).await,
        Err(ServiceError::NotFound(_))
    ));
    assert!(matches!(
        services.bookings.delete(created.id).await,
        Err(ServiceError::NotFound(_))
    ));
    let orders = services.cleaning_orders.list().await.unwrap();
    assert_eq!(orders.len(), 2);
    assert!(orders.iter().all(|o| o.booking_id == created.id));
}

#[actix_web::test]
async fn long_stays_are_written_in_full() {
    let (services, _pool) = services().await;
    let room = room(&services).await;
    let check_in = at(2024, 1, 1, 15, 0);

    booking(&services, room.id, check_in, check_in + Duration::days(400)).await;

    let orders = services.cleaning_orders.list().await.unwrap();
    // Days 0..=398 get a periodic clean, plus the turnover.
    assert_eq!(orders.len(), 400);
}
