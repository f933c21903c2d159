//! Isometric grid of "data blocks" that light up at random

use leptos::prelude::*;

use crate::core::activity_trail::{ActivityTrail, GRID_COLS, GRID_ROWS, TRAIL_LENGTH};

#[cfg(not(feature = "ssr"))]
use crate::core::activity_trail::TICK_INTERVAL_MS;
#[cfg(not(feature = "ssr"))]
use gloo_timers::callback::Interval;

#[component]
pub fn CubeGrid() -> impl IntoView {
    let total = GRID_ROWS * GRID_COLS;
    let trail = RwSignal::new(ActivityTrail::new(total, TRAIL_LENGTH));

    #[cfg(not(feature = "ssr"))]
    {
        let interval = Interval::new(TICK_INTERVAL_MS, move || {
            trail.try_update(|trail| trail.tick(js_sys::Math::random));
        });
        let interval = StoredValue::new_local(Some(interval));
        on_cleanup(move || {
            // Dropping the handle clears the timer
            interval.try_update_value(|interval| interval.take());
        });
    }

    view! {
        <div class="relative w-full h-[400px] cube-grid-perspective flex items-center justify-center overflow-hidden">
            <div
                class="grid gap-2 cube-grid-tilt scale-75 md:scale-100"
                style=format!("grid-template-columns: repeat({}, minmax(0, 1fr)); width: fit-content;", GRID_COLS)
            >
                {(0..total)
                    .map(|cell| {
                        let active = move || trail.with(|trail| trail.is_active(cell));
                        let cell_class = move || {
                            if active() {
                                "cube-grid-cell cube-grid-cell-active w-8 h-8 md:w-12 md:h-12 border border-slate-700/50 rounded-sm relative"
                            } else {
                                "cube-grid-cell w-8 h-8 md:w-12 md:h-12 border border-slate-700/50 rounded-sm relative"
                            }
                        };
                        view! {
                            <div class=cell_class>
                                <Show when=active>
                                    <div class="absolute inset-1 border border-teal-900/30 bg-teal-50/10"></div>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
