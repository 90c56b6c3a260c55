use eyre::Result;
use futures::future::join_all;
use hotel_tests::{BookOutcome, TestCtxBuilder};

mod util;

#[tokio::test]
#[ntest::timeout(20_000)]
async fn single_room_gets_exactly_one_booking() -> Result<()> {
    let ctx = TestCtxBuilder::new()
        .with_rooms(1)
        .with_worker_threads(4)
        .build()
        .await?;

    // Spread the bookers over all worker threads
    let mut api = ctx.api.clone();
    let mut futures = Vec::new();
    for i in 0..16 {
        api = api.clone();
        let api = api.clone();
        futures.push(async move { api.book_room(&format!("guest_{i}")).await });
    }

    let mut booked = 0;
    let mut rejected = 0;
    for response in join_all(futures).await {
        match response?.result? {
            BookOutcome::Booked { room } => {
                assert_eq!(room, 1, "only room 1 exists");
                booked += 1;
            }
            BookOutcome::NoRoomsAvailable => rejected += 1,
        }
    }
    assert_eq!(booked, 1, "exactly one booker must win the single room");
    assert_eq!(rejected, 15);

    assert_eq!(ctx.api.get_bookings().await?.result?.len(), 1);

    drop(api);
    ctx.finish().await;
    Ok(())
}

#[tokio::test]
#[ntest::timeout(20_000)]
async fn concurrent_bookers_never_overbook() -> Result<()> {
    let rooms = 3;
    let ctx = TestCtxBuilder::new()
        .with_rooms(rooms)
        .with_worker_threads(4)
        .build()
        .await?;

    let mut api = ctx.api.clone();
    let mut futures = Vec::new();
    for i in 0..12 {
        api = api.clone();
        let api = api.clone();
        futures.push(async move { api.book_room(&format!("guest_{i}")).await });
    }

    let mut booked = 0;
    for response in join_all(futures).await {
        if let BookOutcome::Booked { room } = response?.result? {
            assert!(room >= 1 && room <= rooms);
            booked += 1;
        }
    }
    assert_eq!(booked, rooms, "every room must be booked exactly once");

    let bookings = ctx.api.get_bookings().await?.result?;
    assert_eq!(bookings.len(), rooms as usize);
    // No double assignment: the room numbers are exactly 1..=rooms
    let numbers: Vec<u32> = bookings.iter().map(|booking| booking.room).collect();
    assert_eq!(numbers, (1..=rooms).collect::<Vec<u32>>());

    drop(api);
    ctx.finish().await;
    Ok(())
}

#[tokio::test]
#[ntest::timeout(20_000)]
async fn concurrent_book_and_cancel_keep_the_ledger_consistent() -> Result<()> {
    let rooms = 3;
    let ctx = TestCtxBuilder::new()
        .with_rooms(rooms)
        .with_worker_threads(4)
        .build()
        .await?;

    let mut api = ctx.api.clone();
    let mut futures = Vec::new();
    for i in 0..20 {
        api = api.clone();
        let api = api.clone();
        futures.push(async move {
            if i % 2 == 0 {
                api.book_room("X").await.map(|response| response.result.map(|_| ()))
            } else {
                api.cancel_booking("X")
                    .await
                    .map(|response| response.result.map(|_| ()))
            }
        });
    }
    for response in join_all(futures).await {
        response??;
    }

    // Whatever interleaving happened, the ledger must be coherent: only "X"
    // occupies rooms, and the remaining capacity is exactly what fills up.
    let occupied = ctx.api.get_bookings().await?.result?;
    assert!(occupied.len() <= rooms as usize);
    assert!(occupied.iter().all(|booking| booking.guest == "X"));

    for _ in occupied.len()..rooms as usize {
        assert!(matches!(
            ctx.api.book_room("filler").await?.result?,
            BookOutcome::Booked { .. }
        ));
    }
    assert_eq!(
        ctx.api.book_room("filler").await?.result?,
        BookOutcome::NoRoomsAvailable
    );

    drop(api);
    ctx.finish().await;
    Ok(())
}
