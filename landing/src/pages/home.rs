// Home page - every marketing section in scroll order
use crate::sections::{Contact, Courses, Footer, Hero, Nav, Reviews, Stats, StudentResults};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Nav />
        <main>
            <Hero />
            <Stats />
            <StudentResults />
            <Reviews />
            <Contact />
            <Courses />
        </main>
        <Footer />
    }
}
