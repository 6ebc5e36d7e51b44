pub fn render_welcome(name: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body style="font-family: sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
    <h2>Welcome to SkillSync</h2>
    <p>Hi {name},</p>
    <p>Your account has been created. Fill in your skills to start getting personalized job matches.</p>
    <p style="color: #666; font-size: 14px;">If you didn't expect this email, you can ignore it.</p>
</body>
</html>"#
    )
}

pub fn render_application_accepted(job_title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body style="font-family: sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
    <h1 style="color: green;">Congratulations!</h1>
    <p>You have been accepted for <strong>{job_title}</strong>.</p>
    <p>The recruiter will reach out with next steps.</p>
</body>
</html>"#
    )
}

pub fn render_application_rejected(job_title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body style="font-family: sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
    <p>Thank you for your interest in <strong>{job_title}</strong>.</p>
    <p>We have moved forward with other candidates.</p>
</body>
</html>"#
    )
}
