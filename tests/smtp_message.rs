#[cfg(all(
    feature = "smtp-transport",
    any(feature = "native-tls", feature = "rustls-tls")
))]
mod smtp {
    use relaymail::{transport::smtp::build_message, Attachment, Envelope, Priority};

    fn formatted(envelope: &Envelope) -> String {
        String::from_utf8(build_message(envelope).unwrap().formatted()).unwrap()
    }

    fn builder() -> relaymail::message::EnvelopeBuilder {
        Envelope::builder("nobody@gmail.com".parse().unwrap())
            .to("hei@domain.tld".parse().unwrap())
            .subject("Happy new year")
            .body("<p>Be happy!</p>")
    }

    #[test]
    fn html_body_and_headers() {
        let envelope = builder()
            .cc("yuin@domain.tld".parse().unwrap())
            .reply_to("support@domain.tld".parse().unwrap())
            .sender("boss@domain.tld".parse().unwrap())
            .build()
            .unwrap();
        let message = formatted(&envelope);

        assert!(message.contains("From: nobody@gmail.com\r\n"));
        assert!(message.contains("To: hei@domain.tld\r\n"));
        assert!(message.contains("Cc: yuin@domain.tld\r\n"));
        assert!(message.contains("Reply-To: support@domain.tld\r\n"));
        assert!(message.contains("Sender: boss@domain.tld\r\n"));
        assert!(message.contains("Subject: Happy new year\r\n"));
        assert!(message.contains("X-Priority: 1\r\n"));
        assert!(message.contains("Content-Type: text/html; charset=utf-8\r\n"));
        assert!(message.contains("<p>Be happy!</p>"));
    }

    #[test]
    fn bcc_only_in_smtp_envelope() {
        let envelope = builder()
            .bcc("hidden@domain.tld".parse().unwrap())
            .build()
            .unwrap();
        let message = build_message(&envelope).unwrap();

        let formatted = String::from_utf8(message.formatted()).unwrap();
        assert!(!formatted.contains("hidden@domain.tld"));

        let recipients = message
            .envelope()
            .to()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        assert_eq!(recipients, ["hei@domain.tld", "hidden@domain.tld"]);
    }

    #[test]
    fn priority() {
        let envelope = builder().priority(Priority::Low).build().unwrap();
        assert!(formatted(&envelope).contains("X-Priority: 5\r\n"));
    }

    #[test]
    fn attachments_in_order() {
        let envelope = builder()
            .attachment(Attachment::new(b"first".to_vec(), "one", "txt"))
            .attachment(Attachment::new(b"second".to_vec(), "two", "csv"))
            .build()
            .unwrap();
        let message = formatted(&envelope);

        assert!(message.contains("multipart/mixed"));
        let html = message.find("text/html").unwrap();
        let one = message.find("filename=\"one.txt\"").unwrap();
        let two = message.find("filename=\"two.csv\"").unwrap();
        assert!(html < one && one < two);
        assert!(message.contains("Content-Type: text/csv"));
    }
}
