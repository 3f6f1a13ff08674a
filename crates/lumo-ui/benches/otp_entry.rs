use std::hint::black_box;
use std::rc::Rc;

use criterion::{criterion_group, criterion_main, Criterion};
use lumo_foundation::{FocusDirection, FocusManager};
use lumo_ui::{OtpConfig, OtpState};

struct NoopFocus;

impl FocusManager for NoopFocus {
    fn move_focus(&self, _direction: FocusDirection) {}
}

fn fill_and_clear(c: &mut Criterion) {
    c.bench_function("otp_fill_and_clear_6", |b| {
        let config = OtpConfig::default();
        let mut state = OtpState::new(config, Rc::new(NoopFocus), None).with_on_complete(|code| {
            black_box(code);
        });
        b.iter(|| {
            for index in 0..6 {
                state.on_digit_entered(index, '8');
            }
            for index in (1..6).rev() {
                state.on_backspace_pressed(index);
                state.on_digit_deleted(index);
            }
            state.on_digit_deleted(0);
            black_box(state.revision())
        });
    });
}

criterion_group!(benches, fill_and_clear);
criterion_main!(benches);
