//! Static pages printed by the informational commands.
//!
//! Every page starts with a newline so it is separated from the echoed command
//! line, matching the other rendered output.

/// Boot banner shown at startup and after `reboot`.
pub const WELCOME: &str = r#"
╔═══════════════════════════════════════════════╗
║                    WELCOME TO AMIT'S SYSTEM
║
║        🚀 DevOps Engineer & GenAI Solution Architect 🤖
║                    @ Leapfrog Technology Inc.
║               https://www.linkedin.com/in/oneamitj
║
║  System initialized... Loading portfolio data...
║  AWS Services: ████████████████████████████████ 100%
║  GenAI Models: ████████████████████████████████ 100%
║  DevOps Tools: ████████████████████████████████ 100%
║  Compliance:   ████████████████████████████████ 100%
║
║  🎯 8+ Years Experience | 🎓 B.E. Computer Science
║  📍 Kathmandu, Nepal
║
║  Type 'help' to see available commands
║  Type 'about' to learn more about me
╚═══════════════════════════════════════════════╝

Boot sequence complete. Ready for commands...

🌟 Quick Facts:
• AWS Expert
• Led team growth from 4 to 20+ AWS certified engineers
• Optimized GenAI products: 40% performance ↑, 50% cost ↓
• Drove technical solutions from concept to deployment
• Spearheaded the development of GenAI products,
• Compliance audits for HIPAA, SOC2, and other standards.
• Guided company to be 🏆 APN Advanced Partner
"#;

pub const ABOUT: &str = r#"
╔═══════════════════════════════════════════════╗
║                          ABOUT AMIT JOSHI
╚═══════════════════════════════════════════════╝

🚀 Dynamic DevOps and GenAI Solution Architect

📍 Location: Kathmandu, Bāgmatī, Nepal
🎓 Education: B.E. Computer Science, Kathmandu University (2015)
💼 Current Role: Solution Architect @ Leapfrog Technology Inc.
⏱️ Experience: 8+ years in DevOps & Cloud Engineering

🌟 Professional Summary:
═════════════════════════════════════════════════

Dynamic DevOps and GenAI developer with deep expertise in AWS,
Terraform, Kubernetes, and modern CI/CD pipelines, alongside
hands-on experience in developing and optimizing LLM workflows
and integrating cloud-native GenAI solutions.

Proven ability to design scalable, secure, and cost-efficient
infrastructures, including HIPAA-compliant and multi-tenant
systems. Skilled at leading cross-functional teams, driving
GenAI innovation, and improving product performance by up to 40%
while cutting costs by 50%.

🏆 Key Achievements:
═════════════════════════════════════════════════
• Led AWS efforts earning APN Advanced membership
• Grew certified engineers from 4 to 20+ team members
• Improved product performance by 10x (100+ to 1000+ pages)
• Optimized GenAI costs by 50% while boosting performance by 40%
• Scaled data processing by 500% (8 to 40+ external connections)
• Boosted CI/CD frequency by 400% (monthly to weekly deployments)
• Reduced deployment time by 20% and onboarding by 90%
• Designed HIPAA-compliant multi-tenant serverless systems

💡 Core Specializations:
═════════════════════════════════════════════════
• Cloud-Native Architecture (AWS Expert Level)
• GenAI/LLM Integration & Optimization
• Infrastructure as Code (Terraform, CloudFormation)
• HIPAA/SOC2 Compliance & Security
• DevOps Team Leadership & Scaling
• Multi-tenant System Architecture
• Real-time Data Processing & ETL

🎯 Current Focus:
═════════════════════════════════════════════════
Passionate about leveraging cutting-edge GenAI tools to ensure
seamless deployment, operational excellence, and high availability
while maintaining the highest standards of security and compliance.

🏅 Awards & Recognition:
• Ncell App Camp 2014 Winner (Corporate Solutions)
• Global Startup Weekend Kathmandu Winner (Techstars)
"#;

pub const CONTACT: &str = r#"
╔═══════════════════════════════════════════════╗
║                        CONTACT INFO
╚═══════════════════════════════════════════════╝

📧 Email:     one.amitj@gmail.com
🐙 GitHub:    github.com/oneamitj
💼 LinkedIn:  linkedin.com/in/oneamitj
📍 Location:  Kathmandu, Bāgmatī, Nepal
🏢 Company:   Leapfrog Technology Inc.

🤝 Let's Connect!
═════════════════════════════════════════════════

I'm always open to discussing:
• DevOps architecture and best practices
• GenAI/LLM integration strategies
• AWS cloud solutions and optimization
• Infrastructure automation with Terraform
• HIPAA/SOC2 compliance implementations
• Team leadership and scaling DevOps teams
• Multi-tenant serverless architectures

Feel free to reach out for:
🎯 Collaboration opportunities
💼 Consulting and freelance projects
🤝 Networking and knowledge sharing
☕ Tech chat over virtual coffee!

🌟 Available for:
• Full-time opportunities (Solution Architect/Principal Engineer)
• Contract/consulting work (DevOps/GenAI projects)
• Speaking engagements and tech talks
• Mentoring junior engineers

📊 Response Time: Usually within 24 hours
🌍 Time Zone: Nepal Time (NPT, UTC+5:45)
"#;

pub const WHOAMI: &str = r#"
oneamitj@devops:~$ whoami

🚀 Amit Joshi - DevOps Engineer & GenAI Solution Architect

Quick Facts:
• 8+ years in DevOps and Cloud Engineering
• AWS Expert with 20+ certified team members led
• GenAI enthusiast optimizing LLM workflows
• HIPAA/SOC2 compliance specialist
• Currently architecting solutions at Leapfrog Technology
"#;

pub const ACHIEVEMENTS: &str = r#"
╔═══════════════════════════════════════════════╗
║                      KEY ACHIEVEMENTS
╚═══════════════════════════════════════════════╝

📈 PERFORMANCE & SCALE:
═════════════════════════════════════════════════
🚀 Improved product performance by 10x (100+ to 1000+ pages)
📊 Scaled systems to handle 500% more data sources (8 → 40+)
⚡ Boosted CI/CD deployment frequency by 400% (monthly → weekly)
⏱️ Reduced deployment time by 20%
🎯 Reduced new service onboarding time by 90%

💰 COST OPTIMIZATION:
═════════════════════════════════════════════════
💡 Optimized GenAI product performance by 40% while reducing costs by 50%
💰 Decreased AWS infrastructure costs by 30%
📉 Achieved significant cost savings through infrastructure optimization

👥 TEAM LEADERSHIP:
═════════════════════════════════════════════════
🎓 Led team growth from 4 to 20+ AWS certified engineers
📈 Expanded DevOps team from 5 to 20+ members
🏆 Achieved AWS APN Advanced Partner status for company
🎯 Established company's GenAI development services

🏥 COMPLIANCE & SECURITY:
═════════════════════════════════════════════════
🔒 Built HIPAA-compliant multi-tenant serverless systems
🛡️ Conducted successful SOC2 compliance audits
🏥 Designed secure healthcare data processing pipelines
🔐 Implemented data isolation and rapid tenant onboarding

🤖 GENAI INNOVATION:
═════════════════════════════════════════════════
🧠 Spearheaded company's GenAI product development
🔬 Researched and established GenAI development services
⚡ Automated EdTech manual processes using GenAI
🎓 Improved educational alignment checking by 90% efficiency
"#;

pub const AWARDS: &str = r#"
╔═══════════════════════════════════════════════╗
║                    AWARDS & RECOGNITION
╚═══════════════════════════════════════════════╝

🏆 COMPETITION WINS:
═════════════════════════════════════════════════

🥇 Ncell App Camp 2014 (Corporate Solutions Winner)
   📅 December 2014 | 🏢 Issued by Ncell
   📱 Developed "Opinio" - Corporate decision-making app
   📊 Analyzed social media data for business insights
   🌟 Nation-level app development competition

🥇 Global Startup Weekend Kathmandu (Winner)
   📅 November 2014 | 🏢 Issued by Techstars
   🤖 Built sentiment analysis API for business analytics
   💼 Helped businesses analyze customer sentiments
   🌍 International startup competition

🎯 PROFESSIONAL RECOGNITION:
═════════════════════════════════════════════════

🚀 Led company to AWS APN Advanced Partner status
👥 Recognized for exceptional team leadership and growth
🏥 Successfully delivered multiple HIPAA-compliant solutions
💡 Innovation leader in GenAI integration and optimization

📈 IMPACT METRICS:
═════════════════════════════════════════════════
• 500% increase in system scale and capacity
• 400% improvement in deployment frequency
• 50% cost reduction with 40% performance improvement
• 90% reduction in manual processes through automation
"#;

pub const CERTIFICATIONS: &str = r#"
╔═══════════════════════════════════════════════╗
║                    CERTIFICATIONS & LEARNING
╚═══════════════════════════════════════════════╝

🎓 PROFESSIONAL CERTIFICATIONS:
═════════════════════════════════════════════════

🧠 Self-Awareness: Leading with Emotional Intelligence
   📅 January 2022 | 🏢 Dale Carnegie Digital
   🎯 Leadership and emotional intelligence development

💪 Secrets of Motivation
   📅 January 2022 | 🏢 Dale Carnegie Digital
   🎯 Team motivation and performance optimization

☁️ AWS EXPERTISE:
═════════════════════════════════════════════════
🏆 Led company to AWS APN Advanced Partner status
👥 Grew team from 4 to 20+ AWS certified engineers
🎓 Expert-level knowledge across AWS services:
   • EC2, ECS, EKS, Lambda
   • RDS, S3, CloudFormation
   • Bedrock, SageMaker, Glue
   • VPC, IAM, CloudWatch

🤖 GENAI EXPERTISE:
═════════════════════════════════════════════════
• OpenAI GPT-4, Claude, Llama models
• RAG (Retrieval-Augmented Generation)
• Prompt Engineering optimization
• Azure AI Foundry integration
• AWS Bedrock implementation

🛡️ COMPLIANCE EXPERTISE:
═════════════════════════════════════════════════
🏥 HIPAA Compliance (Expert level)
🔒 SOC2 Audit experience
🛡️ Security best practices implementation
"#;

pub const LINKEDIN: &str = r#"
🔗 Opening LinkedIn Profile...

Profile: linkedin.com/in/oneamitj
═════════════════════════════════════════════════

📊 Profile Stats:
• 500+ connections
• 273 profile views (past 7 days)
• 1,613 post impressions
• 80 search appearances

🌟 Recent Activity:
• Posted about AI-Assisted Programming
• Shared LeapTalk session on "Avoiding Over-Engineering in AWS"
• Active in DevOps and GenAI communities

💼 Connect with me for:
• DevOps architecture discussions
• GenAI integration strategies
• AWS cloud solutions
• Team leadership insights

🚀 Link: https://linkedin.com/in/oneamitj
"#;

pub const GITHUB: &str = r#"
🐙 Opening GitHub Profile...

Profile: github.com/oneamitj
═════════════════════════════════════════════════

💻 Repositories:
• Infrastructure as Code (Terraform)
• DevOps automation scripts
• GenAI integration examples
• CI/CD pipeline templates

🔧 Technologies:
• Python, Go, Bash scripting
• Docker, Kubernetes configs
• AWS CloudFormation templates
• Monitoring and logging setups

⭐ Featured Projects:
• Multi-tenant serverless architectures
• HIPAA-compliant system designs
• GenAI optimization frameworks
• Hybrid cloud implementations

🚀 Link: https://github.com/oneamitj

Note: Some repositories may be private due to client confidentiality
"#;

pub const EASTER: &str = r#"
🎮 EASTER EGG ACTIVATED! 🎮

    ╔═════════════════════════════════╗
    ║          RETRO GAME OVER
    ║
    ║    🕹️  ACHIEVEMENT UNLOCKED! 🕹️
    ║
    ║  You found the secret command!
    ║
    ║  🏆 Master Terminal Navigator 🏆
    ║
    ║  Score: 1337 points
    ║  Level: DevOps Wizard
    ║
    ║    Press any key to continue...
    ╚═════════════════════════════════╝

Fun fact: This portfolio runs as a single small binary,
no frameworks needed! Sometimes the old ways are the best ways. 🚀
"#;

pub const MATRIX: &str = r#"
🔴 RED PILL DETECTED 🔴

01001000 01100101 01101100 01101100 01101111
01010111 01101111 01110010 01101100 01100100
01000001 01101101 01101001 01110100 01001010
01101111 01110011 01101000 01101001 00100001

Wake up, Neo... The Matrix has you...
Following the white rabbit led you here.

But in the real world, I work with:
• Container orchestration matrices (Kubernetes)
• Infrastructure matrices (multi-cloud, multi-region)
• Data matrices (ETL pipelines, data lakes)
• Service meshes (connecting all the dots)

The Matrix is everywhere... even in DevOps! 🤖

01000101 01111000 01101001 01110100 01101001
01101110 01100111 00100000 01001101 01100001
01110100 01110010 01101001 01111000 00101110
"#;

/// `sudo rm -rf ...`.
pub const SUDO_DANGER: &str = r#"
⚠️  DANGER ZONE DETECTED ⚠️

sudo: rm -rf /: Operation not permitted
Access denied. Nice try though! 😄

This is a portfolio terminal, not a real server.
No systems were harmed in the making of this command.

Fun fact: In real DevOps work, we use:
• Infrastructure as Code to prevent manual mistakes
• Proper access controls and permissions
• Backup and disaster recovery procedures
• Immutable infrastructure patterns

Safety first! 🛡️
"#;

/// Plain `sudo`.
pub const SUDO_DENIED: &str = r#"
🔒 sudo: Sorry, user amit is not in the sudoers file.
This incident will be reported to the administrator.

Just kidding! 😄 This is a portfolio terminal.
In real life, I practice the principle of least privilege:
• Users get only the permissions they need
• Regular audits of access rights
• Proper IAM policies and role-based access
• Multi-factor authentication everywhere

Security through proper design, not through obscurity! 🔐
"#;

pub const HACK: &str = r#"
🎭 HACKING INITIATED 🎭

Accessing mainframe...
Bypassing firewall...
Decrypting passwords...
Installing backdoor...

██████████████████████████████ 100%

HACK COMPLETE!
Just kidding! This is just a portfolio terminal 😄
The only thing being hacked here is your expectations!
"#;

/// Output of `cat resume.pdf` (and the `resume`/`cv` aliases).
pub const RESUME_OPEN: &str = "
📄 Opening resume.pdf...
🔗 Resume download functionality would be implemented here
💼 Contains detailed work history and technical skills
";

pub const RESUME_DOWNLOAD: &str = "
📥 Preparing resume.pdf for download...
🔗 https://www.linkedin.com/in/oneamitj (full profile and PDF export)
💼 The resume lists detailed work history, certifications and technical skills
";

pub const FORK_BOMB: &str = r#"
💣 FORK BOMB DEFUSED 💣

:(){ :|:& };: would spawn processes until the machine gives up.
Not on my watch! This shell has exactly one process and it is busy being a portfolio.

In production we guard against this with:
• Per-user process limits (ulimit -u)
• cgroup pids controllers on every container
• Alerting on runaway process counts
"#;

pub const RECURSIVE_DELETE: &str = r#"
⚠️  DANGER ZONE DETECTED ⚠️

rm: refusing to remove anything recursively on a portfolio.
No systems were harmed in the making of this command.

Real infrastructure gets the same treatment:
• Immutable infrastructure instead of hand edits
• Versioned backups with tested restores
• Least-privilege IAM so nobody can do this by accident
"#;

pub const FORMAT_DISK: &str = r#"
⚠️  DANGER ZONE DETECTED ⚠️

mkfs: there is no disk here to format, only a résumé.
Filesystems are provisioned with Terraform around here, never by hand. 🛡️
"#;

pub const DISK_WIPE: &str = r#"
⚠️  DANGER ZONE DETECTED ⚠️

dd: writing to a device is not permitted in this terminal.
Snapshots before surgery, always. 💾
"#;

pub const EXIT: &str = "
👋 Thanks for visiting! Logging out...
🔗 Stay in touch: linkedin.com/in/oneamitj
";

pub const REBOOT: &str = "
🔄 Rebooting system...
";
