use crate::{
    reminder::send_birthday_reminders::SendBirthdayRemindersUseCase, shared::usecase::execute,
};
use actix_web::rt::time::{interval_at, Instant};
use birthday_reminder_infra::BirthdayContext;
use std::time::Duration;

const DAY_MILLIS: i64 = 1000 * 60 * 60 * 24;

/// Millis from `now_ts` until the next time the clock (UTC) hits `send_hour`
pub fn get_start_delay(now_ts: i64, send_hour: u32) -> u64 {
    let millis_into_day = now_ts.rem_euclid(DAY_MILLIS);
    let send_at = i64::from(send_hour) * 1000 * 60 * 60;
    let delay = if send_at >= millis_into_day {
        send_at - millis_into_day
    } else {
        DAY_MILLIS - millis_into_day + send_at
    };
    delay as u64
}

pub fn start_daily_reminders_job(ctx: BirthdayContext) {
    actix_web::rt::spawn(async move {
        let now = ctx.sys.get_timestamp_millis();
        let millis_to_first_run = get_start_delay(now, ctx.config.send_hour);
        let start = Instant::now() + Duration::from_millis(millis_to_first_run);

        let mut daily_interval = interval_at(start, Duration::from_millis(DAY_MILLIS as u64));
        loop {
            daily_interval.tick().await;
            let usecase = SendBirthdayRemindersUseCase {
                date: ctx.sys.today(),
            };
            let _ = execute(usecase, &ctx).await;
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: i64 = 1000 * 60 * 60;

    #[test]
    fn start_delay_works() {
        assert_eq!(get_start_delay(0, 7), 7 * HOUR as u64);
        assert_eq!(get_start_delay(7 * HOUR, 7), 0);
        assert_eq!(get_start_delay(8 * HOUR, 7), 23 * HOUR as u64);
        assert_eq!(get_start_delay(6 * HOUR + 1000, 7), (HOUR - 1000) as u64);
        assert_eq!(get_start_delay(3 * DAY_MILLIS + 23 * HOUR, 0), HOUR as u64);
        assert_eq!(get_start_delay(DAY_MILLIS - 1, 23), (23 * HOUR + 1) as u64);
    }
}
