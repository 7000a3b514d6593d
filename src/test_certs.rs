//! Self-signed certificate fixtures for tests, generated with openssl.

/// Subject: `CN=alice Smith, O=Example Corp, C=US`.
pub const ALICE_CERT_PEM: &str = r#"-----BEGIN CERTIFICATE-----
MIIDVTCCAj2gAwIBAgIUBYJwpKnS8eJfIk4WnJBN6Eam5hMwDQYJKoZIhvcNAQEL
BQAwOjEUMBIGA1UEAwwLYWxpY2UgU21pdGgxFTATBgNVBAoMDEV4YW1wbGUgQ29y
cDELMAkGA1UEBhMCVVMwHhcNMjYwODA1MDIzNzA3WhcNMzYwODAyMDIzNzA3WjA6
MRQwEgYDVQQDDAthbGljZSBTbWl0aDEVMBMGA1UECgwMRXhhbXBsZSBDb3JwMQsw
CQYDVQQGEwJVUzCCASIwDQYJKoZIhvcNAQEBBQADggEPADCCAQoCggEBAPfKdvdl
IykGWhlUNZjHXpnT/nEd0IEVFFnCx0/0YJkPU0gTAWW9vGYrkHeI+KHQhCSRel00
auPfpmXN9607ysPAzeKGXjGUqtVO8tnWAUR0tC8GtRyqaN0LsYdJDBSpSn/hI3cv
M7uFTdbduAWfKfom27n6PoRCa6iDOPmlXQ02idjfrhheNv1FOgqX6NZ7zPh8HCwq
dvV4fBBEAYkGQg0UVyE9yXJaY3P4IXEsGIzVbA2lWrldUnho0f1GGTnmNB8Hh/E0
Ydvc5E/Khnb0Q9uV4IuMZajgtct8+voorw8a6QR1cJR9hq+NmX4iOPd9XugiIrnL
vzUs6yDVrQ+0SocCAwEAAaNTMFEwHQYDVR0OBBYEFNnt1pSnNudDE/xxXJRXgWqa
vA7BMB8GA1UdIwQYMBaAFNnt1pSnNudDE/xxXJRXgWqavA7BMA8GA1UdEwEB/wQF
MAMBAf8wDQYJKoZIhvcNAQELBQADggEBAHntdz9CiE7/gF19qp9eiYMCvjDCzbRP
29vOaakmstaCdNH5Lcm9K+giGIC7fz7AvWQCdeKep+7VqntlF+1Ot7Hp26QBhRki
vgrfawE+nln4Vgm2c/d6+kVNmZqJztiNxDWmmVFpaXs4SE+rTCVDENN55VcK0d3X
xXkMyzRUGB9xYzQ9LN6grHXa3JDsZ783ChQ+Kmj6YoJNceLvm4bnLremgSADE8Ci
DnRum+1QtjU4s5OcWxW58U1e6lxiOdEt+Fkt4dCkuD5Iy7/YmmJGqQ6huaox8LhW
We8kxk5cCFOB9ikmfz2/Ip+6xpIb95i1FZEhvRRfGTNqKSBqEccLeH8=
-----END CERTIFICATE-----"#;

/// Subject: `O=Example Corp, OU=Sales` (no CN attribute).
pub const NO_CN_CERT_PEM: &str = r#"-----BEGIN CERTIFICATE-----
MIIDLzCCAhegAwIBAgIUEr9NryrroCVjLb07hM/1kSFZzNMwDQYJKoZIhvcNAQEL
BQAwJzEVMBMGA1UECgwMRXhhbXBsZSBDb3JwMQ4wDAYDVQQLDAVTYWxlczAeFw0y
NjA4MDUwMjM3MDdaFw0zNjA4MDIwMjM3MDdaMCcxFTATBgNVBAoMDEV4YW1wbGUg
Q29ycDEOMAwGA1UECwwFU2FsZXMwggEiMA0GCSqGSIb3DQEBAQUAA4IBDwAwggEK
AoIBAQCjVVV75D9ffLgEFKwQRwvf7CaMMiTZMgX9KEQgh0IEa5G2NYmx/2bbIMgS
MTwaduGorHXaJxOI7gSO1cMv1Uncqx8O9IlQj4+lKAwSIZMrPhVrgiugiWKidEua
FrWsLDi191NULI0RTTY19GJX1cSDb736bIdw6uy8UEkRLT87TfF/gWuC+rSsnoHg
LEprgk2DNB7gpdHsgCS86T54rd2Xps/xvzCpwKSNvgs0fytfi5ujqYxR4aCdvsFX
j04orVIvQHc8gsuhvsl7786GromSSmqxOuAq3UQhN+SnoO++nGyjcc7H4QLupF+6
sz3Xx9To0iFKnr/DDznVJ7QiQ/otAgMBAAGjUzBRMB0GA1UdDgQWBBSSzdlb3tgN
yXwrNo9Yq9+ikey+njAfBgNVHSMEGDAWgBSSzdlb3tgNyXwrNo9Yq9+ikey+njAP
BgNVHRMBAf8EBTADAQH/MA0GCSqGSIb3DQEBCwUAA4IBAQAzQXhLvrBoRgYk3OiG
gDwmFQG2TejVVA8ceYMtQATTrD9HurAMKhTlAeCV8fYwsC3MYvsy3IlUrdH+v7oI
VCAgcBN6QxWxr9+n0w7XXTxiycZkjADnkAsJylP6gGE9NHBqRiUnqQfJr4NJHTXK
Szt1VTUkhgrUDBS3k/4UvLrXdZMQ8g5Fs3C0fp/cJSaBjSswvMqZj9PTOZanKrfW
gIND/JLt1ndp/ahx5SOgpGKwwcmnmsg5R9Fz4ewYgYHUBW2Z2CuVRH0EJaSm6m4H
V4Y9ek9Und9g6MKT1btDzWwembkJgUHDBNIvrKruHizFhcdWLr+dGIKWp9dc3Jtm
t5Gb
-----END CERTIFICATE-----"#;
