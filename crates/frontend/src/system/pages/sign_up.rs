use contracts::enums::view::View;
use contracts::navigation::NavigationIntent;
use leptos::prelude::*;
use thaw::*;

use crate::layout::header::Header;
use crate::layout::navigation_bridge::{use_navigate_with_intent, use_navigation_bridge};
use crate::shared::page_frame::PageFrame;
use crate::system::auth::use_auth;

#[derive(Debug, Clone, Default)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
}

impl SignUpForm {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Name is required");
        }
        if self.email.trim().is_empty() {
            return Err("Email is required");
        }
        if !self.email.contains('@') {
            return Err("Enter a valid email address");
        }
        if self.password.is_empty() {
            return Err("Password is required");
        }
        if self.password != self.confirm {
            return Err("Passwords do not match");
        }
        Ok(())
    }
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    use_navigation_bridge().take_for(View::SignUp);

    let auth = use_auth();
    let go = use_navigate_with_intent();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<&'static str>>(None);

    let submit = {
        let go = go.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let form = SignUpForm {
                name: name.get_untracked(),
                email: email.get_untracked(),
                password: password.get_untracked(),
                confirm: confirm.get_untracked(),
            };
            match form.validate() {
                Ok(()) => {
                    set_error.set(None);
                    auth.sign_in(&form.email);
                    go(NavigationIntent::new(View::Home));
                }
                Err(msg) => set_error.set(Some(msg)),
            }
        }
    };

    view! {
        <PageFrame page_id="signup--auth" title="Sign Up">
            <Header />
            <form class="auth-form" on:submit=submit>
                <h1 class="auth-form__title">"Create Account"</h1>
                {move || error.get().map(|e| view! {
                    <MessageBar intent=MessageBarIntent::Error>
                        <MessageBarBody>{e}</MessageBarBody>
                    </MessageBar>
                })}
                <div class="form__group">
                    <label class="form__label">"Full name"</label>
                    <Input value=name />
                </div>
                <div class="form__group">
                    <label class="form__label">"Email"</label>
                    <Input value=email placeholder="you@example.com" />
                </div>
                <div class="form__group">
                    <label class="form__label">"Password"</label>
                    <Input value=password input_type=InputType::Password />
                </div>
                <div class="form__group">
                    <label class="form__label">"Confirm password"</label>
                    <Input value=confirm input_type=InputType::Password />
                </div>
                <Button appearance=ButtonAppearance::Primary button_type=ButtonType::Submit>
                    "Sign Up"
                </Button>
                <p class="auth-form__switch">
                    "Already registered? "
                    <a href="#" on:click=move |e| {
                        e.prevent_default();
                        go(NavigationIntent::new(View::SignIn));
                    }>"Sign in"</a>
                </p>
            </form>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, password: &str, confirm: &str) -> SignUpForm {
        SignUpForm {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            confirm: confirm.into(),
        }
    }

    #[test]
    fn test_sign_up_validation() {
        assert_eq!(form("", "a@b.c", "x", "x").validate(), Err("Name is required"));
        assert_eq!(form("Ann", "", "x", "x").validate(), Err("Email is required"));
        assert_eq!(form("Ann", "a@b.c", "x", "y").validate(), Err("Passwords do not match"));
        assert_eq!(form("Ann", "a@b.c", "x", "x").validate(), Ok(()));
    }
}
