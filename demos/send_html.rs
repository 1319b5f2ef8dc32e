use relaymail::{Attachment, Credential, Locale, Mailer, SendOptions, SmtpTransport};

fn main() {
    tracing_subscriber::fmt::init();

    // The html we want to send.
    let html = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Hello from relaymail!</title>
</head>
<body>
    <h2 style="font-family: Arial, Helvetica, sans-serif;">Hello from relaymail!</h2>
</body>
</html>"#;

    let credential = Credential::new("example_username@gmail.com", "example_password");
    let options = SendOptions::new()
        .cc("yuin@domain.tld")
        .attachment(Attachment::new(b"Be happy!".to_vec(), "note", "txt"));

    // Relay and port are picked from the credential domain
    let mailer = Mailer::new(SmtpTransport::new());
    match mailer.send_mail(
        &credential,
        "hei@domain.tld",
        "Hello from relaymail!",
        html,
        &options,
    ) {
        Ok(outcome) => println!("{}", outcome.message(Locale::English)),
        Err(e) => panic!("Could not send email: {e}"),
    }
}
