// ── NETCONF session over the SSH `netconf` subsystem ──
//
// Blocking call-and-response: one channel, sequential message-ids,
// NETCONF 1.0 framing. This is deliberately the minimum protocol needed
// to read one configuration subtree, not a general NETCONF client.

use std::io::Write;
use std::net::TcpStream;

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::error::Error;
use crate::frame::{FrameReader, encode_frame};
use crate::parse::extract_rpc_error;

const BASE_NS: &str = "urn:ietf:params:xml:ns:netconf:base:1.0";

const CLIENT_HELLO: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
    <hello xmlns=\"urn:ietf:params:xml:ns:netconf:base:1.0\">\
    <capabilities>\
    <capability>urn:ietf:params:netconf:base:1.0</capability>\
    </capabilities></hello>";

/// A live NETCONF session to one device.
pub struct NetconfSession {
    reader: FrameReader<ssh2::Channel>,
    // Held so the SSH transport outlives the channel.
    _session: ssh2::Session,
    message_id: u64,
}

impl NetconfSession {
    /// Connect, authenticate, and exchange `<hello>` with the device.
    ///
    /// Host-key verification is skipped — optical-transport management
    /// networks are closed and these devices rotate keys on RMA.
    pub fn connect(
        host: &str,
        port: u16,
        username: &str,
        password: &SecretString,
    ) -> Result<Self, Error> {
        debug!(host, port, "opening NETCONF session");

        let tcp = TcpStream::connect((host, port))?;
        let mut session = ssh2::Session::new()?;
        session.set_tcp_stream(tcp);
        session.handshake()?;

        session
            .userauth_password(username, password.expose_secret())
            .map_err(|_| Error::Auth)?;
        if !session.authenticated() {
            return Err(Error::Auth);
        }

        let mut channel = session.channel_session()?;
        channel.subsystem("netconf")?;

        channel.write_all(&encode_frame(CLIENT_HELLO))?;
        let mut reader = FrameReader::new(channel);

        let server_hello = reader.read_frame()?;
        if !server_hello.contains("<hello") {
            return Err(Error::Frame {
                reason: "device did not open with a <hello> message".into(),
            });
        }
        debug!("hello exchanged");

        Ok(Self {
            reader,
            _session: session,
            message_id: 0,
        })
    }

    /// Read the running datastore restricted to a subtree filter.
    ///
    /// Returns the raw `<rpc-reply>` XML for the caller to parse.
    pub fn get_config(&mut self, filter: &str) -> Result<String, Error> {
        let body = format!(
            "<get-config><source><running/></source>\
             <filter type=\"subtree\">{filter}</filter></get-config>"
        );
        self.rpc(&body)
    }

    /// Politely end the session with `<close-session>`.
    pub fn close(mut self) -> Result<(), Error> {
        // The device may drop the channel before replying; that's fine.
        let _ = self.rpc("<close-session/>");
        self.reader.get_mut().close()?;
        Ok(())
    }

    /// Send one RPC and return its reply, surfacing any `<rpc-error>`.
    fn rpc(&mut self, body: &str) -> Result<String, Error> {
        self.message_id += 1;
        let rpc = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <rpc xmlns=\"{BASE_NS}\" message-id=\"{}\">{body}</rpc>",
            self.message_id
        );

        debug!(message_id = self.message_id, "sending rpc");
        self.reader.get_mut().write_all(&encode_frame(&rpc))?;

        let reply = self.reader.read_frame()?;
        if let Some((tag, message)) = extract_rpc_error(&reply)? {
            return Err(Error::Rpc { tag, message });
        }
        Ok(reply)
    }
}
