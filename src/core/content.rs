//! Builtin teaching content
//!
//! Every string the application displays lives here as literal data:
//! four firewall type cards, five security level profiles, six error
//! scenarios, and the UI chrome for both locales. Three scenarios were
//! never translated to Japanese in the source material and resolve with
//! the documented English fallback (`fwlearn check` reports them).

use std::fmt::Write;

use crate::core::catalog::{ContentCatalog, ErrorScenario, FirewallType, SecurityLevel, Severity};
use crate::core::i18n::{Locale, LocalizedList, LocalizedText};

/// Scenario preselected when the error simulator opens
pub const DEFAULT_SCENARIO_ID: &str = "misconfigured-rules";

/// Builds the full catalog. Entry order is display order.
pub fn builtin() -> ContentCatalog {
    ContentCatalog::new(
        firewall_types(),
        security_levels(),
        error_scenarios(),
        DEFAULT_SCENARIO_ID,
    )
}

/// Plain-text outline of a catalog, resolved for one locale
///
/// Backs `fwlearn list` and `fwlearn export --format text`.
pub fn outline(catalog: &ContentCatalog, locale: Locale) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}:", ui::cli::FIREWALL_TYPES.resolve(locale));
    for ft in catalog.firewall_types() {
        let _ = writeln!(out, "  {} {}", ft.glyph, ft.name.resolve(locale));
    }
    let _ = writeln!(out, "{}:", ui::cli::SECURITY_LEVELS.resolve(locale));
    for sl in catalog.security_levels() {
        let _ = writeln!(out, "  {}. {}", sl.level, sl.name.resolve(locale));
    }
    let _ = writeln!(out, "{}:", ui::cli::ERROR_SCENARIOS.resolve(locale));
    for es in catalog.error_scenarios() {
        let _ = writeln!(
            out,
            "  [{}] {} ({})",
            es.severity.badge(),
            es.title.resolve(locale),
            es.id
        );
    }
    out
}

fn firewall_types() -> Vec<FirewallType> {
    vec![
        FirewallType {
            id: "packet-filtering",
            name: LocalizedText::pair(
                "Packet Filtering Firewall",
                "パケットフィルタリングファイアウォール",
            ),
            description: LocalizedText::pair(
                "Examines packets at the network layer and filters based on IP addresses, ports, and protocols.",
                "ネットワーク層でパケットを検査し、IPアドレス、ポート、プロトコルに基づいてフィルタリングします。",
            ),
            glyph: "🔍",
            pros: LocalizedList::pair(
                &["Fast performance", "Low resource usage", "Simple configuration"],
                &["高速パフォーマンス", "低リソース使用量", "シンプルな設定"],
            ),
            cons: LocalizedList::pair(
                &[
                    "Limited security",
                    "No application awareness",
                    "Vulnerable to IP spoofing",
                ],
                &[
                    "限定的なセキュリティ",
                    "アプリケーション認識なし",
                    "IPスプーフィングに脆弱",
                ],
            ),
        },
        FirewallType {
            id: "stateful",
            name: LocalizedText::pair(
                "Stateful Inspection Firewall",
                "ステートフル検査ファイアウォール",
            ),
            description: LocalizedText::pair(
                "Tracks the state of network connections and makes decisions based on the context of the traffic.",
                "ネットワーク接続の状態を追跡し、トラフィックのコンテキストに基づいて決定を行います。",
            ),
            glyph: "🔄",
            pros: LocalizedList::pair(
                &[
                    "Better security",
                    "Connection tracking",
                    "More intelligent filtering",
                ],
                &[
                    "より良いセキュリティ",
                    "接続追跡",
                    "よりインテリジェントなフィルタリング",
                ],
            ),
            cons: LocalizedList::pair(
                &[
                    "Higher resource usage",
                    "More complex configuration",
                    "Slower than packet filtering",
                ],
                &[
                    "より高いリソース使用量",
                    "より複雑な設定",
                    "パケットフィルタリングより遅い",
                ],
            ),
        },
        FirewallType {
            id: "application",
            name: LocalizedText::pair(
                "Application Layer Firewall",
                "アプリケーション層ファイアウォール",
            ),
            description: LocalizedText::pair(
                "Analyzes traffic at the application layer and can understand application protocols.",
                "アプリケーション層でトラフィックを分析し、アプリケーションプロトコルを理解できます。",
            ),
            glyph: "🔬",
            pros: LocalizedList::pair(
                &[
                    "Deep packet inspection",
                    "Application awareness",
                    "Advanced threat detection",
                ],
                &["ディープパケット検査", "アプリケーション認識", "高度な脅威検出"],
            ),
            cons: LocalizedList::pair(
                &[
                    "High resource usage",
                    "Complex configuration",
                    "Potential performance impact",
                ],
                &[
                    "高いリソース使用量",
                    "複雑な設定",
                    "パフォーマンスへの影響の可能性",
                ],
            ),
        },
        FirewallType {
            id: "next-gen",
            name: LocalizedText::pair("Next-Generation Firewall", "次世代ファイアウォール"),
            description: LocalizedText::pair(
                "Combines traditional firewall capabilities with advanced features like intrusion prevention and application control.",
                "従来のファイアウォール機能と侵入防止やアプリケーション制御などの高度な機能を組み合わせています。",
            ),
            glyph: "🚀",
            pros: LocalizedList::pair(
                &[
                    "Comprehensive protection",
                    "Advanced features",
                    "User and application awareness",
                ],
                &["包括的な保護", "高度な機能", "ユーザーとアプリケーション認識"],
            ),
            cons: LocalizedList::pair(
                &["Expensive", "Complex management", "Requires expertise"],
                &["高価", "複雑な管理", "専門知識が必要"],
            ),
        },
    ]
}

fn security_levels() -> Vec<SecurityLevel> {
    vec![
        SecurityLevel {
            level: 1,
            name: LocalizedText::pair("Minimal Security", "最小セキュリティ"),
            description: LocalizedText::pair(
                "Basic packet filtering with minimal rules",
                "最小限のルールによる基本的なパケットフィルタリング",
            ),
            allowed_traffic: LocalizedList::pair(
                &["HTTP/HTTPS", "FTP", "SSH", "All other protocols"],
                &["HTTP/HTTPS", "FTP", "SSH", "その他のすべてのプロトコル"],
            ),
            blocked_traffic: LocalizedList::pair(
                &["Known malicious IPs only"],
                &["既知の悪意のあるIPのみ"],
            ),
            performance: LocalizedText::pair("Excellent", "優秀"),
            protection: LocalizedText::pair("Very Low", "非常に低い"),
        },
        SecurityLevel {
            level: 2,
            name: LocalizedText::pair("Low Security", "低セキュリティ"),
            description: LocalizedText::pair(
                "Standard firewall with basic rules",
                "基本的なルールを持つ標準ファイアウォール",
            ),
            allowed_traffic: LocalizedList::pair(
                &["HTTP/HTTPS", "FTP", "SSH", "SMTP", "DNS"],
                &["HTTP/HTTPS", "FTP", "SSH", "SMTP", "DNS"],
            ),
            blocked_traffic: LocalizedList::pair(
                &["Telnet", "NetBIOS", "Known malicious IPs"],
                &["Telnet", "NetBIOS", "既知の悪意のあるIP"],
            ),
            performance: LocalizedText::pair("Very Good", "非常に良い"),
            protection: LocalizedText::pair("Low", "低い"),
        },
        SecurityLevel {
            level: 3,
            name: LocalizedText::pair("Medium Security", "中程度のセキュリティ"),
            description: LocalizedText::pair(
                "Stateful inspection with moderate rules",
                "中程度のルールによるステートフル検査",
            ),
            allowed_traffic: LocalizedList::pair(
                &["HTTP/HTTPS", "SSH", "SMTP", "DNS", "Specific applications"],
                &["HTTP/HTTPS", "SSH", "SMTP", "DNS", "特定のアプリケーション"],
            ),
            blocked_traffic: LocalizedList::pair(
                &["Telnet", "NetBIOS", "P2P protocols", "Suspicious traffic"],
                &["Telnet", "NetBIOS", "P2Pプロトコル", "不審なトラフィック"],
            ),
            performance: LocalizedText::pair("Good", "良い"),
            protection: LocalizedText::pair("Medium", "中程度"),
        },
        SecurityLevel {
            level: 4,
            name: LocalizedText::pair("High Security", "高セキュリティ"),
            description: LocalizedText::pair(
                "Advanced firewall with strict rules",
                "厳格なルールを持つ高度なファイアウォール",
            ),
            allowed_traffic: LocalizedList::pair(
                &["HTTPS only", "SSH", "Specific whitelisted applications"],
                &["HTTPSのみ", "SSH", "特定のホワイトリストアプリケーション"],
            ),
            blocked_traffic: LocalizedList::pair(
                &[
                    "HTTP",
                    "FTP",
                    "All unapproved protocols",
                    "Suspicious patterns",
                ],
                &[
                    "HTTP",
                    "FTP",
                    "すべての未承認プロトコル",
                    "不審なパターン",
                ],
            ),
            performance: LocalizedText::pair("Moderate", "中程度"),
            protection: LocalizedText::pair("High", "高い"),
        },
        SecurityLevel {
            level: 5,
            name: LocalizedText::pair("Maximum Security", "最大セキュリティ"),
            description: LocalizedText::pair(
                "Enterprise-grade security with zero-trust",
                "ゼロトラストによるエンタープライズグレードセキュリティ",
            ),
            allowed_traffic: LocalizedList::pair(
                &["Whitelisted applications only", "Authenticated users only"],
                &["ホワイトリストアプリケーションのみ", "認証済みユーザーのみ"],
            ),
            blocked_traffic: LocalizedList::pair(
                &[
                    "All traffic by default",
                    "Unapproved applications",
                    "Unknown sources",
                ],
                &[
                    "デフォルトですべてのトラフィック",
                    "未承認アプリケーション",
                    "不明なソース",
                ],
            ),
            performance: LocalizedText::pair("Lower", "低い"),
            protection: LocalizedText::pair("Maximum", "最大"),
        },
    ]
}

fn error_scenarios() -> Vec<ErrorScenario> {
    vec![
        ErrorScenario {
            id: "misconfigured-rules",
            title: LocalizedText::pair(
                "Misconfigured Firewall Rules",
                "ファイアウォールルールの設定ミス",
            ),
            description: LocalizedText::pair(
                "Incorrectly configured rules that either block legitimate traffic or allow malicious traffic.",
                "正当なトラフィックをブロックしたり、悪意のあるトラフィックを許可したりする誤って設定されたルール。",
            ),
            severity: Severity::High,
            category: LocalizedText::pair("Configuration", "設定"),
            symptoms: LocalizedList::pair(
                &[
                    "Legitimate applications cannot connect",
                    "Users report connectivity issues",
                    "Unexpected traffic patterns",
                    "Security alerts for blocked legitimate traffic",
                ],
                &[
                    "正当なアプリケーションが接続できない",
                    "ユーザーが接続の問題を報告",
                    "予期しないトラフィックパターン",
                    "ブロックされた正当なトラフィックのセキュリティアラート",
                ],
            ),
            consequences: LocalizedList::pair(
                &[
                    "Service outages",
                    "User productivity loss",
                    "Security vulnerabilities",
                    "Increased support tickets",
                ],
                &[
                    "サービス停止",
                    "ユーザーの生産性低下",
                    "セキュリティの脆弱性",
                    "サポートチケットの増加",
                ],
            ),
            solutions: LocalizedList::pair(
                &[
                    "Review and test all firewall rules",
                    "Implement rule change management process",
                    "Use rule templates and best practices",
                    "Regular rule audits and cleanup",
                ],
                &[
                    "すべてのファイアウォールルールを確認・テスト",
                    "ルール変更管理プロセスを実装",
                    "ルールテンプレートとベストプラクティスを使用",
                    "定期的なルール監査とクリーンアップ",
                ],
            ),
            code_example: "# Example of misconfigured rule\n\
                iptables -A INPUT -p tcp --dport 80 -j DROP  # Blocks all HTTP traffic\n\
                # Should be:\n\
                iptables -A INPUT -p tcp --dport 80 -j ACCEPT  # Allow HTTP traffic",
        },
        ErrorScenario {
            id: "default-deny",
            title: LocalizedText::pair(
                "Default Deny Without Exceptions",
                "例外なしのデフォルト拒否",
            ),
            description: LocalizedText::pair(
                "Blocking all traffic without proper exceptions for essential services.",
                "重要なサービスの適切な例外なしですべてのトラフィックをブロックする。",
            ),
            severity: Severity::Critical,
            category: LocalizedText::pair("Configuration", "設定"),
            symptoms: LocalizedList::pair(
                &[
                    "Complete network isolation",
                    "No internet connectivity",
                    "DNS resolution failures",
                    "All services inaccessible",
                ],
                &[
                    "完全なネットワーク分離",
                    "インターネット接続なし",
                    "DNS解決の失敗",
                    "すべてのサービスにアクセス不可",
                ],
            ),
            consequences: LocalizedList::pair(
                &[
                    "Complete service outage",
                    "Business operations halted",
                    "Emergency access required",
                    "Potential data loss",
                ],
                &[
                    "完全なサービス停止",
                    "ビジネス運営の停止",
                    "緊急アクセスが必要",
                    "データ損失の可能性",
                ],
            ),
            solutions: LocalizedList::pair(
                &[
                    "Implement proper allow rules before deny",
                    "Test connectivity after rule changes",
                    "Maintain emergency access procedures",
                    "Use whitelist approach with essential services",
                ],
                &[
                    "拒否の前に適切な許可ルールを実装",
                    "ルール変更後の接続性をテスト",
                    "緊急アクセス手順を維持",
                    "重要なサービスでホワイトリストアプローチを使用",
                ],
            ),
            code_example: "# Problematic default deny\n\
                iptables -P INPUT DROP\n\
                iptables -P OUTPUT DROP\n\
                # Missing allow rules for essential services\n\
                \n\
                # Better approach:\n\
                iptables -A INPUT -p tcp --dport 22 -j ACCEPT  # SSH\n\
                iptables -A INPUT -p tcp --dport 80 -j ACCEPT  # HTTP\n\
                iptables -A INPUT -p tcp --dport 443 -j ACCEPT # HTTPS\n\
                iptables -P INPUT DROP  # Then deny all",
        },
        ErrorScenario {
            id: "port-scanning",
            title: LocalizedText::pair("Vulnerable to Port Scanning", "ポートスキャンに脆弱"),
            description: LocalizedText::pair(
                "Firewall allows port scanning activities without detection or prevention.",
                "ファイアウォールが検出や防止なしでポートスキャン活動を許可する。",
            ),
            severity: Severity::Medium,
            category: LocalizedText::pair("Security", "セキュリティ"),
            symptoms: LocalizedList::pair(
                &[
                    "Multiple connection attempts from same IP",
                    "Unusual traffic patterns",
                    "Security monitoring alerts",
                    "Increased network noise",
                ],
                &[
                    "同じIPからの複数の接続試行",
                    "異常なトラフィックパターン",
                    "セキュリティ監視アラート",
                    "ネットワークノイズの増加",
                ],
            ),
            consequences: LocalizedList::pair(
                &[
                    "Network reconnaissance by attackers",
                    "Service enumeration",
                    "Potential attack vector identification",
                    "Resource consumption",
                ],
                &[
                    "攻撃者によるネットワーク偵察",
                    "サービスの列挙",
                    "潜在的な攻撃ベクトルの特定",
                    "リソース消費",
                ],
            ),
            solutions: LocalizedList::pair(
                &[
                    "Implement rate limiting",
                    "Use intrusion detection systems",
                    "Configure connection tracking",
                    "Monitor and alert on suspicious patterns",
                ],
                &[
                    "レート制限を実装",
                    "侵入検知システムを使用",
                    "接続追跡を設定",
                    "不審なパターンを監視・アラート",
                ],
            ),
            code_example: "# Rate limiting example\n\
                iptables -A INPUT -p tcp --dport 22 -m limit --limit 3/min --limit-burst 5 -j ACCEPT\n\
                iptables -A INPUT -p tcp --dport 22 -j DROP\n\
                \n\
                # Connection tracking\n\
                iptables -A INPUT -m state --state ESTABLISHED,RELATED -j ACCEPT",
        },
        // The remaining scenarios were never translated in the source
        // material; they resolve with the English fallback.
        ErrorScenario {
            id: "logging-disabled",
            title: LocalizedText::english("Insufficient Logging"),
            description: LocalizedText::english(
                "Firewall events are not properly logged, making troubleshooting and security analysis difficult.",
            ),
            severity: Severity::Medium,
            category: LocalizedText::english("Monitoring"),
            symptoms: LocalizedList::english(&[
                "No audit trail for blocked traffic",
                "Difficulty troubleshooting issues",
                "No security incident visibility",
                "Compliance violations",
            ]),
            consequences: LocalizedList::english(&[
                "Inability to investigate incidents",
                "Compliance failures",
                "Security blind spots",
                "Delayed problem resolution",
            ]),
            solutions: LocalizedList::english(&[
                "Enable comprehensive logging",
                "Implement log rotation and retention",
                "Use centralized logging systems",
                "Set up log monitoring and alerting",
            ]),
            code_example: "# Enable logging for all rules\n\
                iptables -A INPUT -j LOG --log-prefix \"FW-DENIED: \"\n\
                iptables -A OUTPUT -j LOG --log-prefix \"FW-OUT: \"\n\
                \n\
                # Log to specific file\n\
                iptables -A INPUT -j LOG --log-prefix \"FW-DENIED: \" --log-level 4",
        },
        ErrorScenario {
            id: "outdated-rules",
            title: LocalizedText::english("Outdated Firewall Rules"),
            description: LocalizedText::english(
                "Firewall rules that are no longer relevant or have become security risks.",
            ),
            severity: Severity::High,
            category: LocalizedText::english("Maintenance"),
            symptoms: LocalizedList::english(&[
                "Unused rules in configuration",
                "Legacy service ports open",
                "Deprecated protocols allowed",
                "Complex rule sets",
            ]),
            consequences: LocalizedList::english(&[
                "Increased attack surface",
                "Performance degradation",
                "Configuration complexity",
                "Security vulnerabilities",
            ]),
            solutions: LocalizedList::english(&[
                "Regular rule audits and cleanup",
                "Document rule purposes and owners",
                "Remove unused and deprecated rules",
                "Implement rule lifecycle management",
            ]),
            code_example: "# Audit existing rules\n\
                iptables -L -n --line-numbers\n\
                \n\
                # Remove specific rule\n\
                iptables -D INPUT 5  # Remove rule at line 5\n\
                \n\
                # Clean up unused rules\n\
                # Review and remove rules for:\n\
                # - Decommissioned services\n\
                # - Deprecated protocols\n\
                # - Unused IP ranges",
        },
        ErrorScenario {
            id: "no-backup",
            title: LocalizedText::english("No Configuration Backup"),
            description: LocalizedText::english(
                "Firewall configuration is not backed up, risking complete loss of settings.",
            ),
            severity: Severity::Critical,
            category: LocalizedText::english("Backup"),
            symptoms: LocalizedList::english(&[
                "No backup files available",
                "Configuration changes not documented",
                "No disaster recovery plan",
                "Manual configuration recreation needed",
            ]),
            consequences: LocalizedList::english(&[
                "Complete configuration loss",
                "Extended downtime during recovery",
                "Security policy gaps",
                "Compliance violations",
            ]),
            solutions: LocalizedList::english(&[
                "Implement automated configuration backups",
                "Use version control for configurations",
                "Test backup restoration procedures",
                "Document all configuration changes",
            ]),
            code_example: "# Backup current configuration\n\
                iptables-save > /backup/firewall-$(date +%Y%m%d).rules\n\
                \n\
                # Restore configuration\n\
                iptables-restore < /backup/firewall-20231201.rules\n\
                \n\
                # Automated backup script\n\
                #!/bin/bash\n\
                iptables-save > /backup/firewall-$(date +%Y%m%d-%H%M%S).rules\n\
                find /backup -name \"firewall-*.rules\" -mtime +30 -delete",
        },
    ]
}

/// Localized UI chrome, grouped by view
pub mod ui {
    use crate::core::i18n::LocalizedText;

    pub mod page {
        use super::LocalizedText;

        pub const TITLE: LocalizedText =
            LocalizedText::pair("Firewall Explainer", "ファイアウォール説明");
        pub const SUBTITLE: LocalizedText = LocalizedText::pair(
            "Learn about network security, firewall types, and common configuration errors",
            "ネットワークセキュリティ、ファイアウォールの種類、一般的な設定エラーについて学ぶ",
        );
        pub const TAB_BASICS: LocalizedText =
            LocalizedText::pair("Firewall Basics", "ファイアウォール基礎");
        pub const TAB_SLIDER: LocalizedText =
            LocalizedText::pair("Interactive Slider", "インタラクティブスライダー");
        pub const TAB_ERRORS: LocalizedText =
            LocalizedText::pair("Common Errors", "一般的なエラー");
    }

    pub mod cli {
        use super::LocalizedText;

        pub const FIREWALL_TYPES: LocalizedText =
            LocalizedText::pair("Firewall types", "ファイアウォールの種類");
        pub const SECURITY_LEVELS: LocalizedText =
            LocalizedText::pair("Security levels", "セキュリティレベル");
        pub const ERROR_SCENARIOS: LocalizedText =
            LocalizedText::pair("Error scenarios", "エラーシナリオ");
    }

    pub mod explainer {
        use super::LocalizedText;

        pub const TITLE: LocalizedText =
            LocalizedText::pair("Understanding Firewalls", "ファイアウォールの理解");
        pub const SUBTITLE: LocalizedText = LocalizedText::pair(
            "A firewall is a network security device that monitors and controls incoming and outgoing network traffic based on predetermined security rules. Think of it as a security guard for your network.",
            "ファイアウォールは、事前に設定されたセキュリティルールに基づいて、入出力ネットワークトラフィックを監視・制御するネットワークセキュリティデバイスです。ネットワークの警備員と考えてください。",
        );
        pub const ADVANTAGES: LocalizedText = LocalizedText::pair("Advantages", "利点");
        pub const DISADVANTAGES: LocalizedText = LocalizedText::pair("Disadvantages", "欠点");
        pub const HOW_IT_WORKS: LocalizedText = LocalizedText::pair("How it Works", "動作原理");
        pub const STEPS: [LocalizedText; 4] = [
            LocalizedText::pair(
                "Traffic arrives at firewall",
                "トラフィックがファイアウォールに到達",
            ),
            LocalizedText::pair(
                "Firewall analyzes traffic",
                "ファイアウォールがトラフィックを分析",
            ),
            LocalizedText::pair("Decision made based on rules", "ルールに基づいて決定"),
            LocalizedText::pair(
                "Traffic allowed or blocked",
                "トラフィックを許可またはブロック",
            ),
        ];
        pub const NEXT: LocalizedText = LocalizedText::pair("Next", "次へ");
        pub const PREVIOUS: LocalizedText = LocalizedText::pair("Previous", "前へ");
        pub const STEP: LocalizedText = LocalizedText::pair("Step", "ステップ");
    }

    pub mod slider {
        use super::LocalizedText;

        pub const TITLE: LocalizedText = LocalizedText::pair(
            "Interactive Security Level Slider",
            "インタラクティブセキュリティレベルスライダー",
        );
        pub const SUBTITLE: LocalizedText = LocalizedText::pair(
            "Adjust the security level to see how different firewall configurations affect network traffic, performance, and security.",
            "セキュリティレベルを調整して、異なるファイアウォール設定がネットワークトラフィック、パフォーマンス、セキュリティにどのように影響するかを確認します。",
        );
        pub const MINIMAL_SECURITY: LocalizedText =
            LocalizedText::pair("Minimal Security", "最小セキュリティ");
        pub const MAXIMUM_SECURITY: LocalizedText =
            LocalizedText::pair("Maximum Security", "最大セキュリティ");
        pub const LEVEL: LocalizedText = LocalizedText::pair("Level", "レベル");
        pub const ALLOWED_TRAFFIC: LocalizedText =
            LocalizedText::pair("Allowed Traffic", "許可されたトラフィック");
        pub const BLOCKED_TRAFFIC: LocalizedText =
            LocalizedText::pair("Blocked Traffic", "ブロックされたトラフィック");
        pub const ACTIVE_RULES: LocalizedText =
            LocalizedText::pair("Active Firewall Rules", "アクティブなファイアウォールルール");
        pub const SHOW_TRAFFIC: LocalizedText =
            LocalizedText::pair("Show Traffic Flow", "トラフィックフローを表示");
        pub const HIDE_TRAFFIC: LocalizedText =
            LocalizedText::pair("Hide Traffic Flow", "トラフィックフローを非表示");
        pub const SECURITY_LEVEL: LocalizedText =
            LocalizedText::pair("Security Level", "セキュリティレベル");
        pub const PERFORMANCE: LocalizedText =
            LocalizedText::pair("Performance Impact", "パフォーマンスへの影響");
        pub const PROTECTION: LocalizedText = LocalizedText::pair("Protection", "保護");
        pub const SPEED: LocalizedText = LocalizedText::pair("Speed", "速度");
    }

    pub mod errors {
        use super::LocalizedText;

        pub const TITLE: LocalizedText = LocalizedText::pair(
            "Common Firewall Errors & Solutions",
            "一般的なファイアウォールエラーと解決策",
        );
        pub const SUBTITLE: LocalizedText = LocalizedText::pair(
            "Learn about the most common firewall configuration errors, their consequences, and how to prevent or fix them.",
            "最も一般的なファイアウォール設定エラー、その結果、および防止・修正方法について学びます。",
        );
        pub const COMMON_SYMPTOMS: LocalizedText =
            LocalizedText::pair("Common Symptoms", "一般的な症状");
        pub const POTENTIAL_CONSEQUENCES: LocalizedText =
            LocalizedText::pair("Potential Consequences", "潜在的な結果");
        pub const SOLUTIONS: LocalizedText = LocalizedText::pair("Solutions", "解決策");
        pub const SHOW_CODE: LocalizedText =
            LocalizedText::pair("Show Code Example", "コード例を表示");
        pub const HIDE_CODE: LocalizedText =
            LocalizedText::pair("Hide Code Example", "コード例を非表示");
        pub const PREVENTION_TIPS: LocalizedText =
            LocalizedText::pair("Prevention Tips", "防止のヒント");
        pub const TIPS: [LocalizedText; 5] = [
            LocalizedText::pair(
                "Always test rules in a staging environment first",
                "常にステージング環境でルールをテストする",
            ),
            LocalizedText::pair(
                "Document all configuration changes",
                "すべての設定変更を文書化する",
            ),
            LocalizedText::pair(
                "Implement change management procedures",
                "変更管理手順を実装する",
            ),
            LocalizedText::pair(
                "Regular security audits and reviews",
                "定期的なセキュリティ監査とレビュー",
            ),
            LocalizedText::pair(
                "Keep firewall software updated",
                "ファイアウォールソフトウェアを最新に保つ",
            ),
        ];
        pub const SEVERITY: LocalizedText = LocalizedText::pair("SEVERITY", "重要度");
    }
}
