mod about;
mod common;
mod contact;
mod experience;
mod footer;
mod hero;
mod navbar;
mod projects;
mod skills;
mod testimonials;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::SiteConfig;
use crate::content::BRAND;

use about::About;
use contact::Contact;
use experience::Experience;
use footer::Footer;
use hero::Hero;
use navbar::Navbar;
use projects::Projects;
use skills::Skills;
use testimonials::Testimonials;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/qa-portfolio.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(SiteConfig::default());

    view! {
        <Title text=format!("{BRAND} | QA Automation Portfolio") />
        <Meta
            name="description"
            content="QA automation engineer and quality assurance lead: test frameworks, CI/CD integration, performance testing and test strategy."
        />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

/// The whole site: one page of anchored sections.
#[component]
fn PortfolioPage() -> impl IntoView {
    view! {
        <div class="min-h-screen">
            <Navbar />
            <Hero />
            <main>
                <About />
                <Skills />
                <Projects />
                <Experience />
                <Testimonials />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
