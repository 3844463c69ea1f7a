use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

const PHONE_DISPLAY: &str = "(706) 699-3810";
const CONTACT_EMAIL: &str = "JetRiteDetailing@gmail.com";

const INQUIRY_SUBJECT: &str = "Plane Detailing";
const INQUIRY_TEMPLATE: &str = "Hi JetRite Team,\n\n\
I'm interested in scheduling aircraft detailing services. Here are the details of my aircraft and location:\n\n\
- Aircraft Type: \n\
- Tail Number (N#): \n\
- Location (Airport Name or FBO): \n\
- Preferred Date/Time: \n\
- Requested Services: (e.g., exterior wash, interior deep clean, leather treatment)\n\
- Additional Notes: \n\n\
Please let me know availability, pricing, and any other information needed to confirm the appointment.\n\n\
Thank you,\n[Your Name]\n[Phone Number]\n[Email]";

/// Pre-filled mail-compose deep link for visitors who would rather email
/// than fill in the quote form.
fn inquiry_mail_href() -> String {
    format!(
        "https://mail.google.com/mail/u/0/?fs=1&to=jetritedetailing@gmail.com&su={}&body={}&tf=cm",
        urlencoding::encode(INQUIRY_SUBJECT),
        urlencoding::encode(INQUIRY_TEMPLATE),
    )
}

struct ServiceCard {
    title: &'static str,
    description: &'static str,
    image: &'static str,
    features: [&'static str; 4],
}

const SERVICE_CARDS: [ServiceCard; 3] = [
    ServiceCard {
        title: "Exterior Detailing",
        description: "Complete exterior wash, polish, and protection for your aircraft's pristine appearance.",
        image: "https://planeandpilotmag.com/wp-content/uploads/sites/4/images/stories/photo-gallery/large/apr-09/Diamond-DA40-XLS---Marc-Lee.jpg",
        features: ["Paint restoration", "Surface protection", "Thorough cleaning", "Professional finish"],
    },
    ServiceCard {
        title: "Interior Detailing",
        description: "Deep cleaning and restoration of cockpit, cabin, and all interior surfaces.",
        image: "https://cirrusaircraft.com/wp-content/uploads/2025/05/titan-over-white-sr-series-g7-aircraft-2-1201x771-9aea37c-3-768x493.png",
        features: ["Leather treatment", "Carpet cleaning", "Surface sanitization", "Odor elimination"],
    },
    ServiceCard {
        title: "Wax Protection",
        description: "Advanced wax application for long-lasting protection and brilliant shine.",
        image: "https://images.unsplash.com/photo-1593938346024-7ee982d8224b?w=500w",
        features: ["UV protection", "Weather resistance", "Enhanced shine", "6-month guarantee"],
    },
];

struct Reason {
    title: &'static str,
    description: &'static str,
}

const REASONS: [Reason; 4] = [
    Reason {
        title: "Small Aircraft Expertise",
        description: "Specialized experience with Cessna, Piper, Cirrus, and light aircraft",
    },
    Reason {
        title: "Customer-First Approach",
        description: "Personal attention and trustworthy customer care every time",
    },
    Reason {
        title: "Quick Turnaround",
        description: "Efficient service that respects your time and schedule",
    },
    Reason {
        title: "Mobile Service",
        description: "We come to your hangar or preferred location for your convenience",
    },
];

struct Audience {
    title: &'static str,
    description: &'static str,
    image: &'static str,
    benefits: [&'static str; 3],
}

const AUDIENCES: [Audience; 3] = [
    Audience {
        title: "Small Aircraft Owners",
        description: "Personalized detailing services to maintain your Cessna, Piper, or Cirrus investment",
        image: "https://images.unsplash.com/photo-1541611292906-15e4b710712f?q=80&w",
        benefits: ["Preserve aircraft value", "Personal attention", "Flexible scheduling"],
    },
    Audience {
        title: "Flight Clubs",
        description: "Affordable group packages designed for shared aircraft ownership and club operations",
        image: "https://hartzellprop.com/wp-content/uploads/GettyImages-528318037-1200x800.jpg",
        benefits: ["Group discounts", "Club-friendly scheduling", "Member benefits"],
    },
    Audience {
        title: "Local FBOs",
        description: "Partnership opportunities for small FBOs serving the general aviation community",
        image: "https://airbornavionics.com/uploads/3/4/4/1/34416072/n216ts-fbo_orig.jpg",
        benefits: ["Local partnership", "Quick service", "Reliable results"],
    },
];

struct Testimonial {
    name: &'static str,
    role: &'static str,
    image: &'static str,
    quote: &'static str,
}

const TESTIMONIALS: [Testimonial; 2] = [
    Testimonial {
        name: "Tom Anderson",
        role: "Cessna 172 Owner",
        image: "https://images.unsplash.com/photo-1444313431167-e7921088a9d3",
        quote: "JetRite gave my 172 the care it deserved. Their attention to detail is incredible, and they treat your aircraft like it's their own.",
    },
    Testimonial {
        name: "Linda Martinez",
        role: "Flight Club Manager",
        image: "https://images.unsplash.com/photo-1605590427165-3884d6aa6731",
        quote: "We've used JetRite for our club's Piper Cherokee for over a year. Their reliability and personal touch make all the difference.",
    },
];

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-backdrop">
                <img src="https://images.unsplash.com/photo-1629233650020-aa014ed76f8d" alt="Small Aircraft" />
            </div>
            <div class="hero-content">
                <h1>
                    {"Professional Aircraft"}
                    <span class="hero-accent">{"Detailing Services"}</span>
                </h1>
                <p class="hero-subtitle">
                    {"Tailored aircraft care for Cessna, Piper, Cirrus, and light aircraft owners. \
                      We're not a big company - we're your partner in quality and care."}
                </p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Quote} classes="cta-button">
                        {"Get Free Quote"}
                    </Link<Route>>
                    <a href="tel:+17066993810" class="cta-button-outline">
                        {format!("Call {}", PHONE_DISPLAY)}
                    </a>
                </div>
            </div>
        </section>
    }
}

#[function_component(Services)]
fn services() -> Html {
    html! {
        <section class="services">
            <div class="section-heading">
                <h2>{"Professional Aircraft Care Services"}</h2>
                <p>
                    {"From complete exterior restoration to meticulous interior detailing, \
                      we provide personalized care for your light aircraft."}
                </p>
            </div>
            <div class="card-grid">
                { for SERVICE_CARDS.iter().map(|card| html! {
                    <div class="service-card">
                        <img src={card.image} alt={card.title} />
                        <div class="card-body">
                            <h3>{card.title}</h3>
                            <p>{card.description}</p>
                            <ul class="feature-list">
                                { for card.features.iter().map(|feature| html! {
                                    <li>{feature}</li>
                                }) }
                            </ul>
                        </div>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(WhyChoose)]
fn why_choose() -> Html {
    html! {
        <section class="why-choose">
            <div class="section-heading">
                <h2>{"Why Small Aircraft Owners Choose JetRite"}</h2>
                <p>{"Trusted by aircraft owners and flight clubs for our personal approach and attention to detail."}</p>
            </div>
            <div class="reason-grid">
                { for REASONS.iter().map(|reason| html! {
                    <div class="reason-item">
                        <h3>{reason.title}</h3>
                        <p>{reason.description}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(TargetAudience)]
fn target_audience() -> Html {
    html! {
        <section class="audiences">
            <div class="section-heading">
                <h2>{"Tailored Services for Every Client"}</h2>
                <p>{"Specialized solutions for small aircraft owners and flight clubs with personalized service and fair pricing."}</p>
            </div>
            <div class="card-grid">
                { for AUDIENCES.iter().map(|audience| html! {
                    <div class="audience-card">
                        <img src={audience.image} alt={audience.title} />
                        <div class="card-body">
                            <h3>{audience.title}</h3>
                            <p>{audience.description}</p>
                            <ul class="feature-list">
                                { for audience.benefits.iter().map(|benefit| html! {
                                    <li>{benefit}</li>
                                }) }
                            </ul>
                            <Link<Route> to={Route::Quote} classes="card-cta">
                                {format!("Get {} Quote", audience.title)}
                            </Link<Route>>
                        </div>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    html! {
        <section class="testimonials">
            <div class="section-heading">
                <h2>{"Trusted by General Aviation Pilots"}</h2>
                <p>{"See why small aircraft owners and flight clubs choose JetRite for their detailing needs."}</p>
            </div>
            <div class="testimonial-grid">
                { for TESTIMONIALS.iter().map(|t| html! {
                    <div class="testimonial-card">
                        <div class="testimonial-header">
                            <img src={t.image} alt={t.name} />
                            <div>
                                <h4>{t.name}</h4>
                                <p class="testimonial-role">{t.role}</p>
                            </div>
                        </div>
                        <p class="testimonial-quote">{format!("\"{}\"", t.quote)}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    html! {
        <section class="contact">
            <h2>{"Ready to Transform Your Aircraft?"}</h2>
            <p>{"Get a free quote today and experience the JetRite difference. Personal service you can trust for your aircraft."}</p>
            <div class="hero-actions">
                <Link<Route> to={Route::Quote} classes="cta-button">
                    {"Get Free Quote"}
                </Link<Route>>
                <a href="tel:+17066993810" class="cta-button-outline">
                    {format!("Call {}", PHONE_DISPLAY)}
                </a>
            </div>
            <div class="contact-grid">
                <div>
                    <h4>{"Call Us"}</h4>
                    <p>{PHONE_DISPLAY}</p>
                </div>
                <div>
                    <h4>{"Email"}</h4>
                    <p>
                        <a href={inquiry_mail_href()} target="_blank" rel="noopener noreferrer">
                            {CONTACT_EMAIL}
                        </a>
                    </p>
                </div>
                <div>
                    <h4>{"Service Areas"}</h4>
                    <p>{"Thompson | Augusta | Greene County"}</p>
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <h3 class="footer-logo">{"JetRite"}</h3>
                    <p>{"Professional aircraft detailing services for small aircraft owners and flight clubs. Personal attention, quality results."}</p>
                    <p class="footer-copyright">{"© 2024 JetRite. All rights reserved."}</p>
                </div>
                <div>
                    <h4>{"Services"}</h4>
                    <ul>
                        <li>{"Exterior Detailing"}</li>
                        <li>{"Interior Detailing"}</li>
                        <li>{"Wax Protection"}</li>
                    </ul>
                </div>
                <div>
                    <h4>{"Clients"}</h4>
                    <ul>
                        <li>{"Small Aircraft Owners"}</li>
                        <li>{"Flight Clubs"}</li>
                        <li>{"Local FBOs"}</li>
                        <li>{"General Aviation"}</li>
                    </ul>
                </div>
                <div>
                    <h4>{"Contact"}</h4>
                    <ul>
                        <li>{PHONE_DISPLAY}</li>
                        <li>{CONTACT_EMAIL}</li>
                        <li>{"Thompson | Augusta | Greene County"}</li>
                        <li>{"Available by Appointment"}</li>
                    </ul>
                </div>
            </div>
        </footer>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="landing-page">
            <Hero />
            <Services />
            <WhyChoose />
            <TargetAudience />
            <Testimonials />
            <Contact />
            <Footer />
        </div>
    }
}
