//! Static pages

use super::layout::render;
use crate::extractors::PageContext;

pub fn home(ctx: &PageContext) -> String {
    render(
        ctx,
        "Home",
        r#"    <section class="hero">
      <h1>Welcome to my Portfolio</h1>
      <p>Data engineering, analytics and the odd side project.</p>
      <p><a class="button" href="/projects">See my projects</a>
         <a class="button secondary" href="/contact">Get in touch</a></p>
    </section>"#,
    )
}

pub fn about(ctx: &PageContext) -> String {
    render(
        ctx,
        "About",
        r#"    <section>
      <h1>About Me</h1>
      <p>I build data pipelines, reporting systems and small web tools, and I
         care about making data easy to trust and easy to use.</p>
    </section>"#,
    )
}

pub fn resume(ctx: &PageContext) -> String {
    render(
        ctx,
        "Resume",
        r#"    <section>
      <h1>Resume</h1>
      <h2>Skills</h2>
      <ul>
        <li>SQL, data modelling and warehousing</li>
        <li>ETL pipelines and workflow orchestration</li>
        <li>Dashboards and reporting</li>
      </ul>
      <h2>Experience</h2>
      <p>Details available on request.</p>
    </section>"#,
    )
}

pub fn contact(ctx: &PageContext) -> String {
    render(
        ctx,
        "Contact",
        r#"    <section>
      <h1>Contact</h1>
      <form id="contactForm" method="post" action="/contact">
        <label for="name">Name</label>
        <input id="name" name="name" type="text">
        <label for="email">Email</label>
        <input id="email" name="email" type="email">
        <label for="subject">Subject</label>
        <input id="subject" name="subject" type="text">
        <label for="message">Message</label>
        <textarea id="message" name="message" rows="6"></textarea>
        <button type="submit">Send</button>
      </form>
    </section>"#,
    )
}

pub fn thank_you(ctx: &PageContext) -> String {
    render(
        ctx,
        "Thank You",
        r#"    <section>
      <h1>Thank you!</h1>
      <p>Your message has been received. I'll get back to you soon.</p>
      <p><a href="/">Back to home</a></p>
    </section>"#,
    )
}
