use pretty_assertions::assert_eq;
use relaymail::{
    address, provider, Attachment, Credential, Endpoint, Error, Mailer, Outcome, Priority,
    Providers, SendOptions, StubTransport,
};

fn credential() -> Credential {
    Credential::new("sender@gmail.com", "app-password")
}

#[test]
fn validator() {
    assert!(!address::is_valid(""));
    assert!(address::is_valid("a@b.com"));
    assert!(!address::is_valid("a@@b.com"));
    assert!(address::is_valid("a.b+c@sub.domain.co"));
    assert!(!address::is_valid("ab.com"));
    assert!(!address::is_valid("a@b"));
}

#[test]
fn resolver() {
    let endpoint = provider::resolve("gmail.com").unwrap();
    assert_eq!(endpoint, Endpoint::starttls("smtp.gmail.com"));
    assert_eq!((endpoint.host.as_str(), endpoint.port), ("smtp.gmail.com", 587));

    assert_eq!(
        provider::resolve("unknown.tld"),
        Err(Error::UnsupportedProvider("unknown.tld".to_owned()))
    );
}

#[test]
fn empty_recipients_skip_transport() {
    let transport = StubTransport::new_ok();
    let mailer = Mailer::new(transport.clone());

    let none: Vec<String> = Vec::new();
    let outcome = mailer
        .send_bulk_email(&credential(), &none, "Hello", "<p>Hi</p>", &SendOptions::new())
        .unwrap();

    assert_eq!(outcome, Outcome::EmailMissing);
    assert!(transport.deliveries().is_empty());
}

#[test]
fn one_invalid_recipient_skips_transport() {
    let transport = StubTransport::new_ok();
    let mailer = Mailer::new(transport.clone());

    let outcome = mailer
        .send_bulk_email(
            &credential(),
            &["a@gmail.com", "not-an-address", "c@outlook.com"],
            "Hello",
            "<p>Hi</p>",
            &SendOptions::new(),
        )
        .unwrap();
    assert_eq!(outcome, Outcome::WrongDestinationEmail);

    let outcome = mailer
        .send_mail(
            &credential(),
            "a@gmail.com",
            "Hello",
            "<p>Hi</p>",
            &SendOptions::new().cc("b@yahoo.com").cc("c@@outlook.com"),
        )
        .unwrap();
    assert_eq!(outcome, Outcome::WrongDestinationEmail);

    assert!(transport.deliveries().is_empty());
}

#[test]
fn bulk_recipients_in_order() {
    let transport = StubTransport::new_ok();
    let mailer = Mailer::new(transport.clone());

    let outcome = mailer
        .send_bulk_email(
            &credential(),
            &["a@gmail.com", "b@yahoo.com"],
            "Hello",
            "<p>Hi</p>",
            &SendOptions::new(),
        )
        .unwrap();
    assert_eq!(outcome, Outcome::Successful);

    let deliveries = transport.deliveries();
    assert_eq!(deliveries.len(), 1);
    let recipients = deliveries[0]
        .envelope
        .recipients()
        .map(ToString::to_string)
        .collect::<Vec<_>>();
    assert_eq!(recipients, ["a@gmail.com", "b@yahoo.com"]);
}

#[test]
fn transport_fault_is_an_outcome() {
    let mailer = Mailer::new(StubTransport::new_error());

    let outcome = mailer
        .send_mail(&credential(), "a@gmail.com", "Hello", "<p>Hi</p>", &SendOptions::new())
        .unwrap();

    assert_eq!(outcome, Outcome::ErrorSendingMessage);
    assert_eq!(outcome.code(), 4);
}

#[test]
fn relay_follows_credential_domain() {
    let transport = StubTransport::new_ok();
    let mailer = Mailer::new(transport.clone());

    for (account, host, port) in [
        ("me@live.com", "smtp.live.com", 587),
        ("me@Hotmail.com", "smtp.hotmail.com", 587),
        ("me@outlook.com", "smtp.live.com", 587),
        ("me@gmail.com", "smtp.gmail.com", 587),
        ("me@yahoo.com", "smtp.mail.yahoo.com", 465),
    ] {
        let outcome = mailer
            .send_mail(
                &Credential::new(account, "secret"),
                "friend@domain.tld",
                "Hello",
                "<p>Hi</p>",
                &SendOptions::new(),
            )
            .unwrap();
        assert_eq!(outcome, Outcome::Successful);

        let delivery = transport.deliveries().pop().unwrap();
        assert_eq!(
            (delivery.endpoint.host.as_str(), delivery.endpoint.port),
            (host, port),
            "{account}"
        );
    }
}

#[test]
fn unsupported_provider_is_an_error() {
    let transport = StubTransport::new_ok();
    let mailer = Mailer::new(transport.clone());

    let result = mailer.send_mail(
        &Credential::new("me@example.org", "secret"),
        "friend@domain.tld",
        "Hello",
        "<p>Hi</p>",
        &SendOptions::new(),
    );

    assert_eq!(
        result,
        Err(Error::UnsupportedProvider("example.org".to_owned()))
    );
    assert!(transport.deliveries().is_empty());

    let mailer = mailer.with_providers(
        Providers::new().with_endpoint("example.org", Endpoint::wrapper("smtp.example.org")),
    );
    let outcome = mailer
        .send_mail(
            &Credential::new("me@example.org", "secret"),
            "friend@domain.tld",
            "Hello",
            "<p>Hi</p>",
            &SendOptions::new(),
        )
        .unwrap();
    assert_eq!(outcome, Outcome::Successful);
}

#[test]
fn envelope_contents() {
    let transport = StubTransport::new_ok();
    let mailer = Mailer::new(transport.clone());
    let options = SendOptions::new()
        .reply_to("support@domain.tld")
        .bcc("archive@domain.tld")
        .attachment(Attachment::new(b"a,b\n1,2\n".to_vec(), "report", "csv"));

    let outcome = mailer
        .send_mail(
            &credential(),
            "friend@domain.tld",
            "Monthly report",
            "<h1>Report</h1>",
            &options,
        )
        .unwrap();
    assert_eq!(outcome, Outcome::Successful);

    let envelope = transport.deliveries().remove(0).envelope;
    assert_eq!(envelope.subject(), "Monthly report");
    assert_eq!(envelope.body(), "<h1>Report</h1>");
    assert_eq!(envelope.priority(), Priority::High);
    assert_eq!(
        envelope.recipients().map(ToString::to_string).collect::<Vec<_>>(),
        ["friend@domain.tld", "archive@domain.tld"]
    );

    let attachment = &envelope.attachments()[0];
    assert_eq!(attachment.filename(), "report.csv");
    assert_eq!(attachment.content_type(), mime::TEXT_CSV);
}
