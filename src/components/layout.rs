use leptos::*;

pub const TITLE: &str = "排熱回収システム";

const COPYRIGHT: &str = "© 2006-2025 株式会社 ショウワ 無断転載禁止。";

/// Layout component with navbar, content and footer
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <Navbar />
            <main class="main-content">
                {children()}
            </main>
            <footer class="footer">{COPYRIGHT}</footer>
        </div>
    }
}

#[component]
fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar-content">
                <h1 class="navbar-title">{TITLE}</h1>
                <div class="navbar-actions">
                    <CurrentTime />
                </div>
            </div>
        </nav>
    }
}

/// Current time display that updates every second
#[component]
fn CurrentTime() -> impl IntoView {
    let (time, set_time) = create_signal(get_current_time());

    // Update time every second
    #[cfg(target_arch = "wasm32")]
    {
        use gloo_timers::callback::Interval;

        let interval = Interval::new(1000, move || {
            set_time.set(get_current_time());
        });

        on_cleanup(move || drop(interval));
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = set_time;

    view! {
        <span class="current-time">
            {move || time.get()}
        </span>
    }
}

fn get_current_time() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}
