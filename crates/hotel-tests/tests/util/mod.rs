use eyre::Result;
use hotel_tests::TestCtx;

/// Asserts the exact occupancy, given as (room, guest) pairs in room order.
#[allow(unused)]
pub async fn assert_occupancy(ctx: &TestCtx, expected: &[(u32, &str)]) -> Result<()> {
    let bookings = ctx.api.get_bookings().await?.result?;
    let got: Vec<(u32, &str)> = bookings
        .iter()
        .map(|booking| (booking.room, booking.guest.as_str()))
        .collect();
    assert_eq!(got, expected, "occupancy must match exactly");
    Ok(())
}
