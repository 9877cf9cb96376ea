use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use crate::splash::SplashStage;

#[derive(Properties, PartialEq)]
pub struct SplashProps {
    pub on_complete: Callback<()>,
}

/// Full-screen logo intro. Fires `on_complete` once its timeline finishes.
#[function_component(Splash)]
pub fn splash(props: &SplashProps) -> Html {
    let stage = use_state(|| SplashStage::at(0));

    {
        let stage = stage.clone();
        let on_complete = props.on_complete.clone();
        use_effect_with_deps(
            move |_| {
                let timers: Vec<Timeout> = SplashStage::schedule()
                    .into_iter()
                    .map(|(at, next)| {
                        let stage = stage.clone();
                        let on_complete = on_complete.clone();
                        Timeout::new(at, move || {
                            debug!("Splash stage {:?} at {}ms", next, at);
                            stage.set(next);
                            if next == SplashStage::Done {
                                on_complete.emit(());
                            }
                        })
                    })
                    .collect();

                // Dropping a Timeout cancels it.
                move || drop(timers)
            },
            (),
        );
    }

    if *stage == SplashStage::Done {
        return html! {};
    }

    html! {
        <div class={classes!("splash", (!stage.is_covering()).then_some("exiting"))} aria-hidden="true">
            <style>
                {r#"
                .splash {
                    position: fixed;
                    inset: 0;
                    z-index: 9999;
                    background: #0F284A;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    transform: translateY(0);
                    transition: transform 0.8s cubic-bezier(0.22, 1, 0.36, 1);
                }
                .splash.exiting { transform: translateY(-100%); }
                .splash-logo {
                    position: relative;
                    width: 8rem;
                    height: 8rem;
                }
                .splash-layer {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    opacity: 0;
                    transform: scale(0.8);
                    transition: opacity 0.6s cubic-bezier(0.22, 1, 0.36, 1),
                                transform 0.6s cubic-bezier(0.22, 1, 0.36, 1);
                }
                .splash-layer img { width: 100%; height: 100%; object-fit: contain; }
                .splash-layer.shown { opacity: 1; transform: scale(1); }
                .splash-layer.top { z-index: 10; }
                .splash-layer.top.shown { transform: scale(1) translate(20px, 20px); }
                .splash-pulse {
                    position: absolute;
                    inset: 0;
                    border-radius: 9999px;
                    background: #fff;
                    opacity: 0;
                    z-index: -1;
                    box-shadow: 0 0 80px 40px rgba(255, 255, 255, 0.4);
                }
                .splash-pulse.active { animation: splashPulse 2s ease-in-out forwards; }
                @keyframes splashPulse {
                    0% { transform: scale(1); opacity: 0; }
                    33% { transform: scale(1.3); opacity: 0.3; }
                    66% { transform: scale(1.3); opacity: 0.3; }
                    100% { transform: scale(1); opacity: 0; }
                }
                @media (min-width: 768px) {
                    .splash-logo { width: 10rem; height: 10rem; }
                }
                @media (min-width: 1024px) {
                    .splash-logo { width: 12rem; height: 12rem; }
                }
                "#}
            </style>
            <div class="splash-logo">
                <div class={classes!("splash-layer", stage.base_visible().then_some("shown"))}>
                    <img src="/assets/Stack1.svg" alt="Stack Logo 1" />
                </div>
                <div class={classes!("splash-layer", "top", stage.top_visible().then_some("shown"))}>
                    <img src="/assets/Stack2.svg" alt="Stack Logo 2" />
                </div>
                <div class={classes!("splash-pulse", stage.pulsing().then_some("active"))}></div>
            </div>
        </div>
    }
}
